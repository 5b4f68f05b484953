//! Cloud upload delivery (simulated transport)

use shared::{DeliveryResult, ReceiptId};
use tracing::info;

use crate::traits::DeliveryStrategy;
use crate::types::FormattedOutput;

pub struct CloudDelivery {
    base_url: String,
}

impl CloudDelivery {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for CloudDelivery {
    fn default() -> Self {
        Self::new("https://cloud.example.com/reports")
    }
}

impl DeliveryStrategy for CloudDelivery {
    fn channel(&self) -> &'static str {
        "cloud"
    }

    fn deliver(&self, output: &FormattedOutput) -> DeliveryResult {
        // Fresh object key per upload; overwrites are not a thing here.
        let url = format!("{}/{}.{}", self.base_url, ReceiptId::new(), output.extension);

        info!(url = %url, "☁️ report uploaded");

        DeliveryResult::delivered(self.channel(), &url, "uploaded")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_under_base() {
        let output = FormattedOutput {
            format: "html".to_string(),
            extension: "html".to_string(),
            payload: String::new(),
        };

        let result = CloudDelivery::new("https://cloud.example.com/reports/").deliver(&output);
        assert!(result.succeeded());
        assert!(result.target.starts_with("https://cloud.example.com/reports/"));
        assert!(result.target.ends_with(".html"));
    }
}
