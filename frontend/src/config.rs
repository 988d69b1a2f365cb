// Debug builds (`trunk serve`) post leads to a local echo server on port 3001.
// Without one listening, every submit ends in the connection-error notice.
#[cfg(debug_assertions)]
pub fn get_intake_url() -> &'static str {
    "http://localhost:3001/intake"
}

#[cfg(not(debug_assertions))]
pub fn get_intake_url() -> &'static str {
    "https://script.google.com/macros/s/AKfycbwOVCbUPxlZ2LBO63RNiwcYSk1PAEJwl1_MO3lf3N46aQIhRRQdJa8eaKlavTOuwyYO3w/exec"
}

pub const CHECKOUT_URL: &str = "https://buy.stripe.com/00w7sKazu7Qr1KT7H47Re02";
pub const CONTACT_EMAIL: &str = "hola@iaferoz.es";
pub const TELEGRAM_HANDLE: &str = "@iaferoz_soporte";

/// Height of the fixed header, subtracted when scrolling to a section.
pub const HEADER_OFFSET: f64 = 80.0;
