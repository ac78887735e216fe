use tracing::debug;

use extractor_client::{PostExtraction, Result, TagExtractor};

/// Send every batch to the worker concurrently and join fail-fast.
///
/// All invocations are issued up front; the caller suspends exactly once,
/// at the join. If any batch fails the whole dispatch fails with that
/// error and the remaining in-flight futures are dropped. On success the
/// per-batch results are concatenated in batch order, which restores the
/// original request order regardless of completion order.
pub async fn dispatch(
    extractor: &dyn TagExtractor,
    batches: &[Vec<String>],
) -> Result<Vec<PostExtraction>> {
    let calls = batches.iter().map(|batch| extractor.extract_batch(batch));
    let per_batch = futures::future::try_join_all(calls).await?;

    let results: Vec<PostExtraction> = per_batch.into_iter().flatten().collect();
    debug!(batches = batches.len(), posts = results.len(), "All batches extracted");
    Ok(results)
}
