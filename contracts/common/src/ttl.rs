use soroban_sdk::Env;

/// 5,184,000 ledgers ~= 300 days (@ ~5s/ledger)
pub const TTL_THRESHOLD: u32 = 5_184_000;
/// 10,368,000 ledgers ~= 600 days (@ ~5s/ledger)
pub const TTL_EXTEND_TO: u32 = 10_368_000;

/// Extends the time-to-live for the calling contract's instance storage.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}
