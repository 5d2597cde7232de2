//! Rust runtime error variants.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use wirelit_core::ErrorCode;

/// Variants of the bindings' `Error` enum.
static ERROR_VARIANTS: Lazy<HashMap<ErrorCode, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (ErrorCode::CountExceedsLimit, "VectorTooLong"),
        (ErrorCode::EnvelopeBytesExceedMessageLength, "OutOfRange"),
        (ErrorCode::EnvelopeHandlesExceedMessageLength, "OutOfHandles"),
        (ErrorCode::ExceededMaxOutOfLineDepth, "MaxRecursionDepth"),
        (ErrorCode::IncorrectHandleType, "IncorrectHandleSubtype"),
        (ErrorCode::InvalidBoolean, "InvalidBoolean"),
        (ErrorCode::InvalidEmptyStruct, "Invalid"),
        (ErrorCode::InvalidInlineBitInEnvelope, "InvalidInlineBitInEnvelope"),
        (ErrorCode::InvalidNumBytesInEnvelope, "InvalidNumBytesInEnvelope"),
        (ErrorCode::InvalidNumHandlesInEnvelope, "InvalidNumHandlesInEnvelope"),
        (ErrorCode::InvalidPaddingByte, "NonZeroPadding"),
        (ErrorCode::InvalidPresenceIndicator, "InvalidPresenceIndicator"),
        (ErrorCode::MissingRequiredHandleRights, "MissingExpectedHandleRights"),
        (ErrorCode::NonEmptyStringWithNullBody, "UnexpectedNullRef"),
        (ErrorCode::NonEmptyVectorWithNullBody, "UnexpectedNullRef"),
        (ErrorCode::NonNullableTypeWithNullValue, "NotNullable"),
        (ErrorCode::NonResourceUnknownHandles, "CannotStoreUnknownHandles"),
        (ErrorCode::StrictBitsUnknownBit, "InvalidBitsValue"),
        (ErrorCode::StrictEnumUnknownValue, "InvalidEnumValue"),
        (ErrorCode::StrictUnionUnknownField, "UnknownUnionTag"),
        (ErrorCode::StringNotUtf8, "Utf8Error"),
        (ErrorCode::StringTooLong, "StringTooLong"),
        (ErrorCode::TooFewBytes, "OutOfRange"),
        (ErrorCode::TooFewHandles, "OutOfHandles"),
        (ErrorCode::TooManyBytesInMessage, "ExtraBytes"),
        (ErrorCode::TooManyHandlesInMessage, "ExtraHandles"),
        (ErrorCode::UnexpectedOrdinal, "UnexpectedOrdinal"),
        (ErrorCode::UnionFieldNotSet, "UnknownUnionTag"),
    ])
});

pub(super) fn error_variant(code: ErrorCode) -> Option<&'static str> {
    ERROR_VARIANTS.get(&code).copied()
}
