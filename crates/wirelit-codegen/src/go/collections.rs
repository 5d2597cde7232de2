//! Byte slices, handle tables and unknown-field payloads.

use wirelit_core::{HandleDisposition, HandleSubtype, HandleTable};

use crate::error::{EncodeError, ErrorKind, ValuePath};
use crate::literal::UnknownPayload;
use crate::target::Target;

use super::GoBackend;
use super::render::composite;

impl GoBackend {
    /// `[]byte{...}` with `bytes_per_line` bytes on each line.
    pub(super) fn bytes(&self, bytes: &[u8]) -> String {
        if bytes.is_empty() {
            return "[]byte{}".to_string();
        }
        let mut out = String::from("[]byte{\n");
        for chunk in bytes.chunks(self.config.bytes_per_line) {
            let line: Vec<String> = chunk.iter().map(|b| format!("0x{b:02x},")).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out.push('}');
        out
    }

    /// Handle definitions as `[]handleDef{...}`, or `""` when the case has none.
    ///
    /// Tests can only create channels and events up front.
    pub(super) fn handle_defs(&self, defs: &HandleTable) -> Result<String, EncodeError> {
        if defs.is_empty() {
            return Ok("\"\"".to_string());
        }
        let mut out = String::from("[]handleDef{\n");
        for (i, def) in defs.iter().enumerate() {
            let object_type = match def.subtype {
                HandleSubtype::Channel => "ObjectTypeChannel",
                HandleSubtype::Event => "ObjectTypeEvent",
                subtype => {
                    return Err(EncodeError::new(
                        ErrorKind::UnsupportedHandleSubtype {
                            subtype,
                            target: Target::Go.as_str(),
                        },
                        ValuePath::handle_def(i),
                    ));
                }
            };
            out.push_str(&format!(
                "// #{i}:\n{{subtype: {}.{object_type}, rights: {}}},\n",
                self.config.zx_package, def.rights
            ));
        }
        out.push('}');
        Ok(out)
    }

    /// Handles attached to unknown data, resolved against the handle table.
    pub(super) fn handle_infos(&self, handles: &[usize]) -> String {
        if handles.is_empty() {
            return "nil".to_string();
        }
        let zx = &self.config.zx_package;
        let entries: Vec<String> = handles
            .iter()
            .map(|&i| {
                format!(
                    "{{Handle: {}[{i}], Type: {defs}[{i}].subtype, Rights: {defs}[{i}].rights}}",
                    self.config.handles_var,
                    defs = self.config.handle_defs_var,
                )
            })
            .collect();
        composite(&format!("[]{zx}.HandleInfo"), &entries)
    }

    pub(super) fn unknown_data(&self, data: &UnknownPayload<'_>) -> String {
        let fields = [
            format!("Bytes: {}", self.bytes(data.bytes)),
            format!("Handles: {}", self.handle_infos(data.handles)),
        ];
        composite(&format!("{}.UnknownData", self.config.fidl_package), &fields)
    }

    /// Expected outbound handles, each moved with its checked type and rights.
    pub(super) fn handle_dispositions(&self, dispositions: &[HandleDisposition]) -> String {
        if dispositions.is_empty() {
            return "nil".to_string();
        }
        let zx = &self.config.zx_package;
        let entries: Vec<String> = dispositions
            .iter()
            .map(|d| {
                let fields = [
                    format!("Operation: {zx}.HandleOpMove"),
                    format!("Handle: {}[{}]", self.config.handles_var, d.handle),
                    format!("Type: {}", d.subtype.object_type()),
                    format!("Rights: {}", d.rights),
                    format!("Result: {zx}.ErrOk"),
                ];
                composite("", &fields)
            })
            .collect();
        composite(&format!("[]{zx}.HandleDisposition"), &entries)
    }
}
