use tracing::trace;

use crate::middleware::{CallContext, NamedHandle};

/// Run an ordered middleware chain to completion.
///
/// Steps execute strictly sequentially: step *k+1* never begins before step
/// *k* has resolved. The first step to return an error aborts the remainder
/// of the chain, and the error is surfaced to the caller unchanged. An empty
/// chain succeeds immediately, which is how a non-applying rule falls
/// through to the next rule transparently.
pub async fn run_chain(chain: &[NamedHandle], ctx: &mut CallContext) -> anyhow::Result<()> {
    for step in chain {
        trace!(middleware = %step.name, method = %ctx.method, "running middleware step");
        step.handle.handle(ctx).await?;
    }
    Ok(())
}
