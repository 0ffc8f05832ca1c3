/// Represents the unique identifier for a client.
/// Ids are assigned from `1` upwards when the pool is reset.
pub type ClientId = u32;
