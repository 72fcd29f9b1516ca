/// Columns and rows of the square-ish grid a bit-string is laid out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub columns: usize,
    pub rows: usize,
}

impl GridSize {
    /// Grid dimensions for a bit-string of `len` bits.
    pub fn for_bits(len: usize) -> Self {
        Self {
            columns: grid_columns(len),
            rows: grid_rows(len),
        }
    }
}

/// floor(sqrt(len)) + 1
pub fn grid_columns(len: usize) -> usize {
    isqrt(len) + 1
}

/// One less than the column count.
pub fn grid_rows(len: usize) -> usize {
    grid_columns(len) - 1
}

/// Integer square root. The float estimate is corrected so large lengths round down exactly.
fn isqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).map_or(false, |sq| sq <= n) {
        root += 1;
    }
    root
}

#[test]
fn grid_columns_test() {
    assert_eq!(grid_columns(0), 1);
    assert_eq!(grid_columns(1), 2);
    assert_eq!(grid_columns(3), 2);
    assert_eq!(grid_columns(4), 3);
    assert_eq!(grid_columns(99), 10);
    assert_eq!(grid_columns(100), 11);
}

#[test]
fn grid_rows_test() {
    assert_eq!(grid_rows(0), 0);
    assert_eq!(grid_rows(100), 10);
    assert_eq!(GridSize::for_bits(10), GridSize { columns: 4, rows: 3 });
}

#[cfg(target_pointer_width = "64")]
#[test]
fn isqrt_exact_test() {
    let big = usize::MAX;
    let r = isqrt(big);
    assert_eq!(r, u32::MAX as usize);
    assert!((r + 1).checked_mul(r + 1).is_none());
    assert_eq!(isqrt(1 << 40), 1 << 20);
    assert_eq!(isqrt((1 << 40) - 1), (1 << 20) - 1);
}
