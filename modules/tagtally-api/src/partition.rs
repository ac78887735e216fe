/// Split a url list into at most `fanout` near-equal batches.
///
/// Batch size is `ceil(len / fanout)`, so the final batch may be smaller
/// and short inputs produce fewer than `fanout` batches. Batches partition
/// the input exactly: no loss, no duplication, order preserved.
pub fn partition(urls: &[String], fanout: usize) -> Vec<Vec<String>> {
    if urls.is_empty() {
        return Vec::new();
    }
    let batch_size = urls.len().div_ceil(fanout.max(1));
    urls.chunks(batch_size).map(|c| c.to_vec()).collect()
}
