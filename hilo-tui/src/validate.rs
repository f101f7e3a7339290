use hilo_core::Config;

pub fn validate_config(cfg: &Config) -> Result<(), String> {
    // game
    if cfg.game.default_max_number < 1 {
        return Err("game.default_max_number must be >= 1".to_string());
    }

    // ui
    if cfg.ui.tick_ms < 1 {
        return Err("ui.tick_ms must be >= 1".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn zero_bound_rejected() {
        let mut cfg = Config::default();
        cfg.game.default_max_number = 0;
        let err = validate_config(&cfg).unwrap_err();
        assert!(err.contains("default_max_number"));
    }

    #[test]
    fn zero_tick_rejected() {
        let mut cfg = Config::default();
        cfg.ui.tick_ms = 0;
        assert!(validate_config(&cfg).is_err());
    }
}
