use nanoid::nanoid;

/// Length of generated request correlation identifiers
const REQUEST_ID_LEN: usize = 12;

/// Generates a short correlation id attached to every outgoing request
/// as the `X-Request-Id` header
#[must_use]
pub fn request_id() -> String {
    nanoid!(REQUEST_ID_LEN)
}
