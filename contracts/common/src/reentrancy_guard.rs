use soroban_sdk::{symbol_short, Env, Symbol};

use crate::CommonError;

const RE_LOCK: Symbol = symbol_short!("RE_LOCK");

/// Returns `true` while a guarded section is executing in this invocation.
pub fn is_locked(env: &Env) -> bool {
    env.storage().temporary().get(&RE_LOCK).unwrap_or(false)
}

/// Acquire the lock, failing with `CommonError::Reentrant` if it is held.
///
/// The lock lives in temporary storage, so a failed invocation rolls it back
/// together with every other write.
pub fn enter(env: &Env) -> Result<(), CommonError> {
    if is_locked(env) {
        return Err(CommonError::Reentrant);
    }
    env.storage().temporary().set(&RE_LOCK, &true);
    Ok(())
}

/// Release the lock taken by [`enter`].
pub fn exit(env: &Env) {
    env.storage().temporary().remove(&RE_LOCK);
}

/// Run `f` with the lock held. The lock is released on both outcomes.
pub fn guarded<T, E, F>(env: &Env, f: F) -> Result<T, E>
where
    E: From<CommonError>,
    F: FnOnce() -> Result<T, E>,
{
    enter(env)?;
    let result = f();
    exit(env);
    result
}
