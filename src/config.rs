use std::env;

pub const DEFAULT_SUBMIT_URL: &str = "http://127.0.0.1:5000/submit_task";

#[derive(Debug, Clone)]
pub struct Config {
    pub submit_url: String,
}

impl Config {
    /// Reads the master node endpoint from `MASTER_NODE_URL`, falling back to
    /// the local default.
    pub fn from_env() -> Self {
        Self {
            submit_url: env::var("MASTER_NODE_URL").unwrap_or_else(|_| DEFAULT_SUBMIT_URL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            submit_url: DEFAULT_SUBMIT_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_master_node() {
        assert_eq!(Config::default().submit_url, "http://127.0.0.1:5000/submit_task");
    }
}
