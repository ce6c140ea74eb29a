/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at dashboard scale)
///
/// Resource IDs must never be derived from collection length: delete followed
/// by insert under a `len + 1` scheme produces duplicates.
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowflake_ids_are_positive_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..256 {
            let id = snowflake_id();
            assert!(id > 0);
            seen.insert(id);
        }
        // With 12 random bits per millisecond, a tight loop expects a handful
        // of birthday collisions; only a broken generator collapses further.
        assert!(seen.len() > 200);
    }
}
