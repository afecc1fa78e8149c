//! Slot encoder: positional mapping of record values into the scheme's
//! packed plaintext. A pure transform for a fixed context.

use fhe::bfv::{Encoding, Plaintext};
use fhe_traits::FheEncoder;

use super::CryptoContext;
use crate::errors::PipelineError;

/// Encodes `values` so slot `i` carries `values[i]`; all remaining
/// slots keep their default zero. Fails fast when the record does not
/// fit, it is never truncated.
pub fn encode_slots(ctx: &CryptoContext, values: &[u64]) -> Result<Plaintext, PipelineError> {
    if values.len() > ctx.slot_capacity() {
        return Err(PipelineError::SlotCapacityExceeded {
            needed: values.len(),
            capacity: ctx.slot_capacity(),
        });
    }

    Ok(Plaintext::try_encode(values, Encoding::simd(), ctx.params())?)
}

/// A label occupies slot 0 only; the rest of the plaintext stays zero.
pub fn encode_label(ctx: &CryptoContext, label: u8) -> Result<Plaintext, PipelineError> {
    encode_slots(ctx, &[u64::from(label)])
}
