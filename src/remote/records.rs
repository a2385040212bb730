//! Fetch and update calls shared by every record family.

use super::http_client::error_message;
use super::*;
use crate::editor::{AckPolicy, RecordApi, RecordFamily};
use crate::model::RecordId;

impl RecordApi for RemoteClient {
    fn fetch<F: RecordFamily>(&self) -> ConsoleResult<Vec<F::Record>> {
        let label = format!("fetch {}", F::NAME);
        let raw = self.send_text(self.client.get(self.url(F::FETCH_PATH)), &label)?;
        if !raw.status.is_success() {
            return Err(ConsoleError::transport(
                label,
                format!("server error: {}", raw.status.as_u16()),
            ));
        }
        parse_payload(&raw.body, F::NAME)
    }

    fn update<F: RecordFamily>(&self, id: &RecordId, value: &str) -> ConsoleResult<()> {
        let label = format!("update {}", F::NAME);
        let raw = self.send_text(
            self.client
                .post(self.url(F::UPDATE_PATH))
                .json(&F::update_body(id, value)),
            &label,
        )?;

        if !raw.status.is_success() {
            let msg = error_message(&raw.body).unwrap_or_default();
            tracing::warn!(
                family = F::NAME,
                id = %id,
                status = raw.status.as_u16(),
                "update rejected by status"
            );
            return Err(ConsoleError::ServerRejected(msg));
        }

        match F::ACK {
            AckPolicy::StatusOnly => Ok(()),
            AckPolicy::SuccessFlag => {
                let ack: UpdateAck = parse_payload(&raw.body, &format!("{} ack", F::NAME))?;
                if ack.success {
                    Ok(())
                } else {
                    Err(ConsoleError::ServerRejected(ack.error.unwrap_or_default()))
                }
            }
        }
    }
}
