//! Debugging feature flags.
//!
//! Toggle individual diagnostics here. They are only read under
//! `#[cfg(debug_assertions)]`, so release builds stay quiet whatever is set.

pub struct DebugFlags {
    /// Emit per-symbol retrieval and derivation timings.
    pub print_symbol_timings: bool,
    /// Emit the span (first..last timestamp) of each retrieved history.
    pub print_history_span: bool,
    /// Emit sink display/persist events.
    pub print_sink_events: bool,
    /// Emit UI interaction logs (button clicks, settings edits).
    pub print_ui_interactions: bool,
    /// Emit UI state serialization/deserialization logs.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_symbol_timings: true,
    print_history_span: false,
    print_sink_events: true,
    print_ui_interactions: true,
    print_state_serde: false,
    print_shutdown: false,
};
