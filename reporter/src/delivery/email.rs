//! Email report delivery (simulated transport)

use shared::DeliveryResult;
use tracing::info;

use crate::traits::DeliveryStrategy;
use crate::types::FormattedOutput;

pub struct EmailDelivery {
    recipient: String,
}

impl EmailDelivery {
    pub fn new(recipient: &str) -> Self {
        Self {
            recipient: recipient.to_string(),
        }
    }
}

impl Default for EmailDelivery {
    fn default() -> Self {
        Self::new("reports@example.com")
    }
}

impl DeliveryStrategy for EmailDelivery {
    fn channel(&self) -> &'static str {
        "email"
    }

    fn deliver(&self, output: &FormattedOutput) -> DeliveryResult {
        if self.recipient.is_empty() {
            return DeliveryResult::failed(self.channel(), "", "no recipient configured");
        }

        info!(to = %self.recipient, format = %output.format, "📧 report emailed");

        DeliveryResult::delivered(
            self.channel(),
            &self.recipient,
            &format!("report attached as report.{}", output.extension),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_output() -> FormattedOutput {
        FormattedOutput {
            format: "pdf".to_string(),
            extension: "pdf".to_string(),
            payload: "%PDF-REPORT 1.0\n\n%%EOF".to_string(),
        }
    }

    #[test]
    fn test_delivers_to_configured_recipient() {
        let result = EmailDelivery::new("finance@example.com").deliver(&sample_output());
        assert!(result.succeeded());
        assert_eq!(result.target, "finance@example.com");
        assert!(result.detail.contains("report.pdf"));
    }

    #[test]
    fn test_empty_recipient_fails() {
        let result = EmailDelivery::new("").deliver(&sample_output());
        assert!(!result.succeeded());
    }
}
