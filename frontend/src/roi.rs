//! Monthly-loss and payback estimate behind the "how much are you burning" calculator.

pub const EMPLOYEES_MIN: u32 = 1;
pub const EMPLOYEES_MAX: u32 = 50;
pub const WEEKLY_HOURS_MIN: u32 = 5;
pub const WEEKLY_HOURS_MAX: u32 = 100;

/// Fixed price of the offer, in euros.
pub const INVESTMENT: i64 = 600;

const MANUAL_SHARE: f64 = 0.30;
const HOURLY_RATE: f64 = 25.0;
const WEEKS_PER_MONTH: f64 = 4.0;
const LOST_LEADS_FACTOR: f64 = 0.45;
const ERRORS_FACTOR: f64 = 0.10;
const WORKING_DAYS_PER_MONTH: f64 = 22.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sector {
    RealEstate,
    Ecommerce,
    Servicios,
    B2bSaas,
    Otro,
}

impl Sector {
    pub const ALL: [Sector; 5] = [
        Sector::RealEstate,
        Sector::Ecommerce,
        Sector::Servicios,
        Sector::B2bSaas,
        Sector::Otro,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Sector::RealEstate => "Real Estate",
            Sector::Ecommerce => "eCommerce",
            Sector::Servicios => "Servicios",
            Sector::B2bSaas => "B2B SaaS",
            Sector::Otro => "Otro",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoiInput {
    pub sector: Option<Sector>,
    pub employees: u32,
    pub weekly_hours: u32,
}

impl Default for RoiInput {
    fn default() -> Self {
        Self {
            sector: None,
            employees: 5,
            weekly_hours: 10,
        }
    }
}

impl RoiInput {
    pub fn with_sector(self, sector: Sector) -> Self {
        Self {
            sector: Some(sector),
            ..self
        }
    }

    /// Slider values are clamped here so the formula never sees an out-of-range count.
    pub fn with_employees(self, employees: u32) -> Self {
        Self {
            employees: employees.clamp(EMPLOYEES_MIN, EMPLOYEES_MAX),
            ..self
        }
    }

    pub fn with_weekly_hours(self, weekly_hours: u32) -> Self {
        Self {
            weekly_hours: weekly_hours.clamp(WEEKLY_HOURS_MIN, WEEKLY_HOURS_MAX),
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoiResult {
    pub labor_cost: i64,
    pub lost_leads: i64,
    pub errors: i64,
    pub monthly_loss: i64,
    pub yearly_loss: i64,
    pub payback_days: u32,
    pub roi_year1: i64,
}

/// Estimates what manual work costs per month and how fast the fixed
/// investment pays for itself.
///
/// `sector` is accepted but does not change the figures.
pub fn compute(input: &RoiInput) -> RoiResult {
    let employees = f64::from(input.employees);
    let hours = f64::from(input.weekly_hours);

    // 30% of the staff does the manual work
    let labor_cost = ((employees * MANUAL_SHARE) * (hours * WEEKS_PER_MONTH * HOURLY_RATE)).round() as i64;
    let lost_leads = (labor_cost as f64 * LOST_LEADS_FACTOR).round() as i64;
    let errors = (labor_cost as f64 * ERRORS_FACTOR).round() as i64;

    let monthly_loss = labor_cost + lost_leads + errors;
    let yearly_loss = monthly_loss * 12;

    let investment = INVESTMENT as f64;
    let daily_saving = monthly_loss as f64 / WORKING_DAYS_PER_MONTH;
    let payback_days = (investment / daily_saving).ceil();
    let payback_days = if payback_days.is_finite() && payback_days >= 1.0 {
        payback_days as u32
    } else {
        1
    };
    let roi_year1 = (((yearly_loss as f64 - investment) / investment) * 100.0).round() as i64;

    RoiResult {
        labor_cost,
        lost_leads,
        errors,
        monthly_loss,
        yearly_loss,
        payback_days,
        roi_year1,
    }
}

/// Formats euros the way `es-ES` locale formatting does: dots between
/// thousands, and no separator for four-digit amounts.
pub fn format_eur(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let grouped = if digits.len() <= 4 {
        digits
    } else {
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(ch);
        }
        out
    };

    if amount < 0 {
        format!("-{}€", grouped)
    } else {
        format!("{}€", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input(employees: u32, weekly_hours: u32) -> RoiInput {
        RoiInput {
            sector: None,
            employees,
            weekly_hours,
        }
    }

    #[test]
    fn smallest_team_and_hours() {
        let result = compute(&input(1, 5));
        assert_eq!(result.labor_cost, 150);
        assert_eq!(result.lost_leads, 68);
        assert_eq!(result.errors, 15);
        assert_eq!(result.monthly_loss, 233);
        assert_eq!(result.yearly_loss, 2796);
        assert_eq!(result.roi_year1, 366);
        assert_eq!(result.payback_days, 57);
    }

    #[test]
    fn largest_team_and_hours() {
        let result = compute(&input(50, 100));
        assert_eq!(result.labor_cost, 150_000);
        assert_eq!(result.lost_leads, 67_500);
        assert_eq!(result.errors, 15_000);
        assert_eq!(result.monthly_loss, 232_500);
        assert_eq!(result.yearly_loss, 2_790_000);
        assert_eq!(result.payback_days, 1);
    }

    #[test]
    fn default_input_matches_initial_sliders() {
        let result = compute(&RoiInput::default());
        // 5 * 0.3 * 10 * 4 * 25
        assert_eq!(result.labor_cost, 1500);
        assert_eq!(result.lost_leads, 675);
        assert_eq!(result.errors, 150);
        assert_eq!(result.monthly_loss, 2325);
        assert_eq!(result.payback_days, 6);
    }

    #[test]
    fn sector_does_not_change_figures() {
        let base = input(12, 40);
        let expected = compute(&base);
        for sector in Sector::ALL {
            assert_eq!(compute(&base.with_sector(sector)), expected);
        }
    }

    #[test]
    fn setters_clamp_to_slider_ranges() {
        let clamped = RoiInput::default().with_employees(0).with_weekly_hours(500);
        assert_eq!(clamped.employees, EMPLOYEES_MIN);
        assert_eq!(clamped.weekly_hours, WEEKLY_HOURS_MAX);

        let clamped = RoiInput::default().with_employees(99).with_weekly_hours(1);
        assert_eq!(clamped.employees, EMPLOYEES_MAX);
        assert_eq!(clamped.weekly_hours, WEEKLY_HOURS_MIN);
    }

    #[test]
    fn euro_formatting() {
        assert_eq!(format_eur(0), "0€");
        assert_eq!(format_eur(600), "600€");
        assert_eq!(format_eur(2796), "2796€");
        assert_eq!(format_eur(10_000), "10.000€");
        assert_eq!(format_eur(232_500), "232.500€");
        assert_eq!(format_eur(2_790_000), "2.790.000€");
        assert_eq!(format_eur(-45_000), "-45.000€");
    }

    proptest! {
        #[test]
        fn figures_hold_together(
            employees in EMPLOYEES_MIN..=EMPLOYEES_MAX,
            hours in WEEKLY_HOURS_MIN..=WEEKLY_HOURS_MAX
        ) {
            let result = compute(&input(employees, hours));
            prop_assert!(result.labor_cost > 0);
            prop_assert_eq!(result.monthly_loss, result.labor_cost + result.lost_leads + result.errors);
            prop_assert_eq!(result.yearly_loss, result.monthly_loss * 12);
            prop_assert!(result.payback_days >= 1);
        }

        #[test]
        fn same_input_same_result(
            employees in EMPLOYEES_MIN..=EMPLOYEES_MAX,
            hours in WEEKLY_HOURS_MIN..=WEEKLY_HOURS_MAX
        ) {
            let first = compute(&input(employees, hours));
            let second = compute(&input(employees, hours));
            prop_assert_eq!(first, second);
        }

        #[test]
        fn more_people_or_hours_never_lose_less(
            employees in EMPLOYEES_MIN..EMPLOYEES_MAX,
            hours in WEEKLY_HOURS_MIN..WEEKLY_HOURS_MAX
        ) {
            let base = compute(&input(employees, hours)).monthly_loss;
            prop_assert!(compute(&input(employees + 1, hours)).monthly_loss >= base);
            prop_assert!(compute(&input(employees, hours + 1)).monthly_loss >= base);
        }
    }
}
