pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, panics are
    // forwarded to `console.error` with their message and location instead
    // of surfacing as an opaque "unreachable" trap.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
