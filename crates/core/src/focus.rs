use taskzen_infra::TaskZenContext;

/// Focus mode gates system-level notifications on top of the always-on
/// in-app notices. The setting is durable, it survives restarts.
const FOCUS_MODE_KEY: &str = "taskzen-focus-mode";

pub fn is_focus_mode_enabled(ctx: &TaskZenContext) -> bool {
    ctx.stores
        .durable
        .get(FOCUS_MODE_KEY)
        .map(|stored| stored == "true")
        .unwrap_or(false)
}

pub fn set_focus_mode(ctx: &TaskZenContext, enabled: bool) {
    ctx.stores
        .durable
        .set(FOCUS_MODE_KEY, if enabled { "true" } else { "false" });
}

pub fn toggle_focus_mode(ctx: &TaskZenContext) -> bool {
    let enabled = !is_focus_mode_enabled(ctx);
    set_focus_mode(ctx, enabled);
    enabled
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskzen_infra::setup_context_inmemory;

    #[test]
    fn defaults_to_disabled() {
        let ctx = setup_context_inmemory();
        assert!(!is_focus_mode_enabled(&ctx));
    }

    #[test]
    fn toggles_and_persists() {
        let ctx = setup_context_inmemory();
        assert!(toggle_focus_mode(&ctx));
        assert!(is_focus_mode_enabled(&ctx));
        assert!(!toggle_focus_mode(&ctx));
        assert!(!is_focus_mode_enabled(&ctx));
    }

    #[test]
    fn garbage_stored_value_reads_as_disabled() {
        let ctx = setup_context_inmemory();
        ctx.stores.durable.set(FOCUS_MODE_KEY, "yes please");
        assert!(!is_focus_mode_enabled(&ctx));
    }
}
