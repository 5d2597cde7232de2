//! Go runtime error identifiers.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use wirelit_core::ErrorCode;

/// Names of the Go bindings runtime errors, without package prefix.
static ERROR_NAMES: Lazy<HashMap<ErrorCode, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (ErrorCode::CountExceedsLimit, "ErrVectorTooLong"),
        (ErrorCode::EnvelopeBytesExceedMessageLength, "ErrPayloadTooSmall"),
        (ErrorCode::EnvelopeHandlesExceedMessageLength, "ErrTooManyHandles"),
        (ErrorCode::ExceededMaxOutOfLineDepth, "ErrExceededMaxOutOfLineDepth"),
        (ErrorCode::IncorrectHandleType, "ErrIncorrectHandleType"),
        (ErrorCode::InvalidBoolean, "ErrInvalidBoolValue"),
        (ErrorCode::InvalidEmptyStruct, "ErrInvalidEmptyStruct"),
        (ErrorCode::InvalidInlineBitInEnvelope, "ErrInvalidInlineBitValueInEnvelope"),
        (ErrorCode::InvalidNumBytesInEnvelope, "ErrInvalidNumBytesInEnvelope"),
        (ErrorCode::InvalidNumHandlesInEnvelope, "ErrInvalidNumHandlesInEnvelope"),
        (ErrorCode::InvalidPaddingByte, "ErrNonZeroPadding"),
        (ErrorCode::InvalidPresenceIndicator, "ErrBadRefEncoding"),
        (ErrorCode::MissingRequiredHandleRights, "ErrMissingRequiredHandleRights"),
        (ErrorCode::NonEmptyStringWithNullBody, "ErrUnexpectedNullRef"),
        (ErrorCode::NonEmptyVectorWithNullBody, "ErrUnexpectedNullRef"),
        (ErrorCode::NonNullableTypeWithNullValue, "ErrUnexpectedNullRef"),
        (ErrorCode::NonResourceUnknownHandles, "ErrValueTypeHandles"),
        (ErrorCode::StrictBitsUnknownBit, "ErrInvalidBitsValue"),
        (ErrorCode::StrictEnumUnknownValue, "ErrInvalidEnumValue"),
        (ErrorCode::StrictUnionUnknownField, "ErrInvalidXUnionTag"),
        (ErrorCode::StringNotUtf8, "ErrStringNotUTF8"),
        (ErrorCode::StringTooLong, "ErrStringTooLong"),
        (ErrorCode::TooFewBytes, "ErrPayloadTooSmall"),
        (ErrorCode::TooFewHandles, "ErrNotEnoughHandles"),
        (ErrorCode::TooManyBytesInMessage, "ErrTooManyBytesInMessage"),
        (ErrorCode::TooManyHandlesInMessage, "ErrTooManyHandlesInMessage"),
        (ErrorCode::UnexpectedOrdinal, "ErrUnexpectedOrdinal"),
        (ErrorCode::UnionFieldNotSet, "ErrInvalidXUnionTag"),
    ])
});

pub(super) fn error_name(code: ErrorCode) -> Option<&'static str> {
    ERROR_NAMES.get(&code).copied()
}
