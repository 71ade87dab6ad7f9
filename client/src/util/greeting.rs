//! Time-of-day greeting for the home view.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

/// Greeting for a local hour in `0..24`.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..12 => "Good Morning",
        12..18 => "Good Afternoon",
        _ => "Good Evening",
    }
}

/// Current local hour from the browser clock; noon outside the browser.
pub fn local_hour() -> u32 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0().get_hours()
    }
    #[cfg(not(feature = "csr"))]
    {
        12
    }
}

/// Greeting for the current local time.
pub fn current_greeting() -> &'static str {
    greeting_for_hour(local_hour())
}
