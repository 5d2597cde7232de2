//! Abstract wire-format error enumeration.
//!
//! Conformance tests assert on these; every target maps each one to its own
//! runtime error identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    CountExceedsLimit,
    EnvelopeBytesExceedMessageLength,
    EnvelopeHandlesExceedMessageLength,
    ExceededMaxOutOfLineDepth,
    IncorrectHandleType,
    InvalidBoolean,
    InvalidEmptyStruct,
    InvalidInlineBitInEnvelope,
    InvalidNumBytesInEnvelope,
    InvalidNumHandlesInEnvelope,
    InvalidPaddingByte,
    InvalidPresenceIndicator,
    MissingRequiredHandleRights,
    NonEmptyStringWithNullBody,
    NonEmptyVectorWithNullBody,
    NonNullableTypeWithNullValue,
    NonResourceUnknownHandles,
    StrictBitsUnknownBit,
    StrictEnumUnknownValue,
    StrictUnionUnknownField,
    StringNotUtf8,
    StringTooLong,
    TooFewBytes,
    TooFewHandles,
    TooManyBytesInMessage,
    TooManyHandlesInMessage,
    UnexpectedOrdinal,
    UnionFieldNotSet,
}

impl ErrorCode {
    /// Every error code, in declaration order.
    pub const ALL: [ErrorCode; 28] = [
        Self::CountExceedsLimit,
        Self::EnvelopeBytesExceedMessageLength,
        Self::EnvelopeHandlesExceedMessageLength,
        Self::ExceededMaxOutOfLineDepth,
        Self::IncorrectHandleType,
        Self::InvalidBoolean,
        Self::InvalidEmptyStruct,
        Self::InvalidInlineBitInEnvelope,
        Self::InvalidNumBytesInEnvelope,
        Self::InvalidNumHandlesInEnvelope,
        Self::InvalidPaddingByte,
        Self::InvalidPresenceIndicator,
        Self::MissingRequiredHandleRights,
        Self::NonEmptyStringWithNullBody,
        Self::NonEmptyVectorWithNullBody,
        Self::NonNullableTypeWithNullValue,
        Self::NonResourceUnknownHandles,
        Self::StrictBitsUnknownBit,
        Self::StrictEnumUnknownValue,
        Self::StrictUnionUnknownField,
        Self::StringNotUtf8,
        Self::StringTooLong,
        Self::TooFewBytes,
        Self::TooFewHandles,
        Self::TooManyBytesInMessage,
        Self::TooManyHandlesInMessage,
        Self::UnexpectedOrdinal,
        Self::UnionFieldNotSet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CountExceedsLimit => "count_exceeds_limit",
            Self::EnvelopeBytesExceedMessageLength => "envelope_bytes_exceed_message_length",
            Self::EnvelopeHandlesExceedMessageLength => "envelope_handles_exceed_message_length",
            Self::ExceededMaxOutOfLineDepth => "exceeded_max_out_of_line_depth",
            Self::IncorrectHandleType => "incorrect_handle_type",
            Self::InvalidBoolean => "invalid_boolean",
            Self::InvalidEmptyStruct => "invalid_empty_struct",
            Self::InvalidInlineBitInEnvelope => "invalid_inline_bit_in_envelope",
            Self::InvalidNumBytesInEnvelope => "invalid_num_bytes_in_envelope",
            Self::InvalidNumHandlesInEnvelope => "invalid_num_handles_in_envelope",
            Self::InvalidPaddingByte => "invalid_padding_byte",
            Self::InvalidPresenceIndicator => "invalid_presence_indicator",
            Self::MissingRequiredHandleRights => "missing_required_handle_rights",
            Self::NonEmptyStringWithNullBody => "non_empty_string_with_null_body",
            Self::NonEmptyVectorWithNullBody => "non_empty_vector_with_null_body",
            Self::NonNullableTypeWithNullValue => "non_nullable_type_with_null_value",
            Self::NonResourceUnknownHandles => "non_resource_unknown_handles",
            Self::StrictBitsUnknownBit => "strict_bits_unknown_bit",
            Self::StrictEnumUnknownValue => "strict_enum_unknown_value",
            Self::StrictUnionUnknownField => "strict_union_unknown_field",
            Self::StringNotUtf8 => "string_not_utf8",
            Self::StringTooLong => "string_too_long",
            Self::TooFewBytes => "too_few_bytes",
            Self::TooFewHandles => "too_few_handles",
            Self::TooManyBytesInMessage => "too_many_bytes_in_message",
            Self::TooManyHandlesInMessage => "too_many_handles_in_message",
            Self::UnexpectedOrdinal => "unexpected_ordinal",
            Self::UnionFieldNotSet => "union_field_not_set",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
