use super::*;

#[test]
fn test_passes_through_result() {
    assert_eq!(ensure_sufficient_stack(|| 7 * 6), 42);

    let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("boom"));
    assert_eq!(result, Err("boom"));
}

#[test]
fn test_nested_sum() {
    fn sum_to(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { n + sum_to(n - 1) })
    }

    assert_eq!(sum_to(100), 5050);
}

#[test]
fn test_deep_recursion_grows_stack() {
    fn depth(n: u32) -> u32 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    // Far deeper than a default 8MB main-thread stack allows.
    assert_eq!(depth(200_000), 200_000);
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn test_remaining_stack_is_reported() {
    assert!(remaining_stack().is_some_and(|bytes| bytes > 0));
}
