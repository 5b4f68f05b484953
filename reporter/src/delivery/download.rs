//! Local download delivery (simulated transport)

use chrono::Utc;
use shared::DeliveryResult;
use tracing::info;

use crate::traits::DeliveryStrategy;
use crate::types::FormattedOutput;

pub struct DownloadDelivery;

impl DeliveryStrategy for DownloadDelivery {
    fn channel(&self) -> &'static str {
        "download"
    }

    fn deliver(&self, output: &FormattedOutput) -> DeliveryResult {
        let filename = format!(
            "report_{}.{}",
            Utc::now().format("%Y%m%d_%H%M%S"),
            output.extension
        );

        info!(file = %filename, "💾 report staged for download");

        DeliveryResult::delivered(self.channel(), &filename, "available for download")
    }
}
