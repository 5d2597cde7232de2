//! Byte literals, handle tables and unknown-field payloads.

use wirelit_core::{HandleDisposition, HandleSubtype, HandleTable};

use crate::error::{EncodeError, ErrorKind, ValuePath};
use crate::literal::UnknownPayload;
use crate::target::Target;

use super::RustBackend;
use super::render::block;

impl RustBackend {
    fn byte_lines(&self, open: &str, bytes: &[u8], close: &str) -> String {
        if bytes.is_empty() {
            return format!("{open}{close}");
        }
        let mut out = format!("{open}\n");
        for chunk in bytes.chunks(self.config.bytes_per_line) {
            let line: Vec<String> = chunk.iter().map(|b| format!("0x{b:02x},")).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out.push_str(close);
        out
    }

    /// Expected bytes as a `&[u8]` slice.
    pub(super) fn byte_slice(&self, bytes: &[u8]) -> String {
        self.byte_lines("&[", bytes, "]")
    }

    pub(super) fn handle_defs(&self, defs: &HandleTable) -> Result<String, EncodeError> {
        let mut entries = Vec::with_capacity(defs.len());
        for (i, def) in defs.iter().enumerate() {
            // The untyped handle has no kernel object to create.
            if def.subtype == HandleSubtype::Handle || !self.is_supported_handle(def.subtype) {
                return Err(EncodeError::new(
                    ErrorKind::UnsupportedHandleSubtype {
                        subtype: def.subtype,
                        target: Target::Rust.as_str(),
                    },
                    ValuePath::handle_def(i),
                ));
            }
            entries.push(format!(
                "HandleDef {{ subtype: {}, rights: {} }}",
                self.object_type(def.subtype),
                self.rights(def.rights)
            ));
        }
        Ok(block("&[", &entries, "]"))
    }

    pub(super) fn unknown_data(&self, data: &UnknownPayload<'_>) -> String {
        let defs = &self.config.handle_defs_var;
        let handles: Vec<String> = data
            .handles
            .iter()
            .map(|&i| {
                format!(
                    "HandleInfo::new({}, {defs}[{i}].subtype, {defs}[{i}].rights)",
                    self.copy_handle(i)
                )
            })
            .collect();
        let fields = [
            format!("bytes: {}", self.byte_lines("vec![", data.bytes, "]")),
            format!("handles: {}", block("vec![", &handles, "]")),
        ];
        block("UnknownData {", &fields, "}")
    }

    pub(super) fn handle_dispositions(&self, dispositions: &[HandleDisposition]) -> String {
        let entries: Vec<String> = dispositions
            .iter()
            .map(|d| {
                let fields = [
                    format!("handle_op: HandleOp::Move({})", self.copy_handle(d.handle)),
                    format!("object_type: {}", self.object_type(d.subtype)),
                    format!("rights: {}", self.rights(d.rights)),
                    "result: Status::OK".to_string(),
                ];
                block("HandleDisposition {", &fields, "}")
            })
            .collect();
        block("vec![", &entries, "]")
    }
}
