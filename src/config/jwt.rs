use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Secret and lifetime used to mint the demo token.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct JWTConfig {
    #[serde(default = "default_secret")]
    pub secret: String,
    /// Lifetime in seconds. Tokens carry no `exp` claim when unset.
    #[serde(default)]
    pub exp: Option<i64>,
}

fn default_secret() -> String {
    "your-256-bit-secret".to_string()
}

impl Default for JWTConfig {
    fn default() -> Self {
        JWTConfig {
            secret: default_secret(),
            exp: None,
        }
    }
}
