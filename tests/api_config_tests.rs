#[cfg(test)]
mod api_config_tests {
    use mindpulse::config::{ApiConfig, BACKEND_URL_ENV};
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_runtime_environment_wins() {
        unsafe {
            env::set_var(BACKEND_URL_ENV, "https://mindpulse.example/backend/");
        }

        let config = ApiConfig::from_env();
        assert_eq!(config.base_url, "https://mindpulse.example/backend");
        assert_eq!(
            config.endpoint(&["api", "patient_scores"]).unwrap().as_str(),
            "https://mindpulse.example/backend/api/patient_scores"
        );

        unsafe {
            env::remove_var(BACKEND_URL_ENV);
        }
    }

    #[test]
    #[serial]
    fn test_invalid_environment_value_fails_validation() {
        unsafe {
            env::set_var(BACKEND_URL_ENV, "localhost:5000");
        }

        let config = ApiConfig::from_env();
        assert!(config.validate().is_err());

        unsafe {
            env::remove_var(BACKEND_URL_ENV);
        }
    }

    #[test]
    #[serial]
    fn test_blank_runtime_value_falls_back() {
        for blank in ["", "   "] {
            unsafe {
                env::set_var(BACKEND_URL_ENV, blank);
            }

            assert_eq!(ApiConfig::from_env(), ApiConfig::build_time_default());
            assert!(!ApiConfig::from_env().base_url.trim().is_empty());
        }

        unsafe {
            env::remove_var(BACKEND_URL_ENV);
        }
        assert_eq!(ApiConfig::from_env(), ApiConfig::build_time_default());
    }
}
