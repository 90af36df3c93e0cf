use crate::websocket::encoding::encoder::check_reply;
use crate::websocket::errors::ClusterError;
use crate::websocket::structs::ready_frame::ReadyFrame;
use crate::websocket::structs::xml_document::XmlDocument;
use crate::websocket::websocket::{parse_server_time, split_modules};

impl ReadyFrame {
    /// Reads the frame answering our `<auth>`. Anything other than a
    /// time-bearing success frame means the credentials were refused.
    pub fn from_document(document: &XmlDocument) -> Result<ReadyFrame, ClusterError> {
        if let Err(ClusterError::Application { code, message }) = check_reply(document) {
            return Err(ClusterError::Authentication(format!("{} ({})", message, code)));
        }
        let root = document.root();
        let time = root
            .attribute("time")
            .ok_or_else(|| ClusterError::Authentication(format!("unexpected <{}> frame after authentication", root.name)))?;
        Ok(ReadyFrame {
            server_time: parse_server_time(time)?,
            name: root.attribute("node").map(str::to_string),
            version: root.attribute("version").map(str::to_string),
            modules: root.attribute("modules").map(split_modules).unwrap_or_default(),
        })
    }
}
