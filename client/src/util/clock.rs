//! Wall-clock source for banner deadlines.

/// Milliseconds since the Unix epoch in the browser; `0.0` during SSR.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
