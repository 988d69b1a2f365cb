use gloo_net::http::Request;
use thiserror::Error;
use web_sys::RequestMode;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LeadSector {
    #[default]
    RealEstate,
    Ecommerce,
    ServiciosB2b,
    Saas,
    Otro,
}

impl LeadSector {
    pub const ALL: [LeadSector; 5] = [
        LeadSector::RealEstate,
        LeadSector::Ecommerce,
        LeadSector::ServiciosB2b,
        LeadSector::Saas,
        LeadSector::Otro,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeadSector::RealEstate => "Real Estate",
            LeadSector::Ecommerce => "eCommerce",
            LeadSector::ServiciosB2b => "Servicios B2B",
            LeadSector::Saas => "SaaS",
            LeadSector::Otro => "Otro (Consultar)",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sector| sector.label() == label)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub sector: LeadSector,
    pub message: String,
}

impl LeadSubmission {
    /// `application/x-www-form-urlencoded` body; keys are the intake sheet's column names.
    pub fn to_form_body(&self) -> String {
        [
            ("Nombre", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Telefono", self.phone.as_str()),
            ("Sector", self.sector.label()),
            ("Mensaje", self.message.as_str()),
        ]
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("intake request failed: {0}")]
    Transport(#[from] gloo_net::Error),
}

/// Posts the lead to the intake endpoint.
///
/// The request goes out in `no-cors` mode, so the response is opaque: `Ok`
/// only means the browser did not report a network failure.
pub async fn submit(fields: &LeadSubmission) -> Result<(), SubmitError> {
    Request::post(config::get_intake_url())
        .mode(RequestMode::NoCors)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(fields.to_form_body())
        .send()
        .await?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    Failed,
}

impl Outcome {
    /// A sent lead dismisses the modal; a failed one leaves it up for a retry.
    pub fn closes_surface(self) -> bool {
        matches!(self, Outcome::Sent)
    }
}

/// Field values plus the in-flight flag of one lead form.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadForm {
    fields: LeadSubmission,
    phase: Phase,
    clears: u32,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self {
            fields: LeadSubmission::default(),
            phase: Phase::Idle,
            clears: 0,
        }
    }
}

impl LeadForm {
    pub fn fields(&self) -> &LeadSubmission {
        &self.fields
    }

    /// Edits are ignored while a request is in flight.
    pub fn edit(&mut self, apply: impl FnOnce(&mut LeadSubmission)) {
        if self.phase == Phase::Idle {
            apply(&mut self.fields);
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Number of times the fields were reset after a send. Controls whose
    /// displayed value the browser keeps on its own (the sector `<select>`)
    /// are keyed on it so they remount showing the cleared value.
    pub fn clears(&self) -> u32 {
        self.clears
    }

    /// Moves to `Submitting` and hands back the snapshot to send, or `None`
    /// if a request is already pending.
    pub fn begin_submit(&mut self) -> Option<LeadSubmission> {
        match self.phase {
            Phase::Submitting => None,
            Phase::Idle => {
                self.phase = Phase::Submitting;
                Some(self.fields.clone())
            }
        }
    }

    pub fn finish(&mut self, result: &Result<(), SubmitError>) -> Outcome {
        self.phase = Phase::Idle;
        match result {
            Ok(()) => {
                self.fields = LeadSubmission::default();
                self.clears = self.clears.wrapping_add(1);
                Outcome::Sent
            }
            Err(_) => Outcome::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> LeadForm {
        let mut form = LeadForm::default();
        form.edit(|fields| {
            fields.name = "Thomas Anderson".to_string();
            fields.email = "ceo@tuempresa.com".to_string();
            fields.phone = "+34 600 000 000".to_string();
            fields.sector = LeadSector::Saas;
            fields.message = "Facturas a mano & PDFs".to_string();
        });
        form
    }

    fn network_error() -> Result<(), SubmitError> {
        Err(SubmitError::Transport(gloo_net::Error::GlooError(
            "Failed to fetch".to_string(),
        )))
    }

    #[test]
    fn form_body_encodes_all_five_fields() {
        let body = filled_form().fields().to_form_body();
        assert_eq!(
            body,
            "Nombre=Thomas%20Anderson&Email=ceo%40tuempresa.com&Telefono=%2B34%20600%20000%20000\
             &Sector=SaaS&Mensaje=Facturas%20a%20mano%20%26%20PDFs"
        );
    }

    #[test]
    fn empty_message_is_still_sent() {
        let body = LeadSubmission::default().to_form_body();
        assert!(body.ends_with("&Mensaje="));
        assert!(body.contains("Sector=Real%20Estate"));
    }

    #[test]
    fn sector_labels_round_trip() {
        for sector in LeadSector::ALL {
            assert_eq!(LeadSector::from_label(sector.label()), Some(sector));
        }
        assert_eq!(LeadSector::from_label("B2B SaaS"), None);
    }

    #[test]
    fn success_clears_fields() {
        let mut form = filled_form();
        let sent = form.begin_submit().expect("idle form should start submitting");
        assert_eq!(sent.name, "Thomas Anderson");
        assert!(form.is_submitting());

        assert_eq!(form.finish(&Ok(())), Outcome::Sent);
        assert!(!form.is_submitting());
        assert_eq!(form.fields(), &LeadSubmission::default());
    }

    #[test]
    fn failure_keeps_fields_for_retry() {
        let mut form = filled_form();
        let before = form.fields().clone();
        form.begin_submit();

        assert_eq!(form.finish(&network_error()), Outcome::Failed);
        assert!(!form.is_submitting());
        assert_eq!(form.fields(), &before);

        assert_eq!(form.begin_submit(), Some(before));
    }

    #[test]
    fn only_a_sent_lead_closes_the_modal() {
        let mut form = filled_form();
        form.begin_submit();
        assert!(!form.finish(&network_error()).closes_surface());

        form.begin_submit();
        assert!(form.finish(&Ok(())).closes_surface());
    }

    #[test]
    fn sent_lead_resets_sector_and_bumps_clears() {
        let mut form = filled_form();
        assert_eq!(form.fields().sector, LeadSector::Saas);
        assert_eq!(form.clears(), 0);

        form.begin_submit();
        form.finish(&network_error());
        assert_eq!(form.clears(), 0);
        assert_eq!(form.fields().sector, LeadSector::Saas);

        form.begin_submit();
        form.finish(&Ok(()));
        assert_eq!(form.clears(), 1);
        assert_eq!(form.fields().sector, LeadSector::RealEstate);
        assert!(form.fields().to_form_body().contains("Sector=Real%20Estate"));
    }

    #[test]
    fn second_submit_while_pending_is_ignored() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        assert!(form.is_submitting());
    }

    #[test]
    fn edits_are_locked_while_submitting() {
        let mut form = filled_form();
        form.begin_submit();
        form.edit(|fields| fields.name.clear());
        assert_eq!(form.fields().name, "Thomas Anderson");
    }
}
