/// Index of the first element in `sorted` that is not less than `value`.
pub fn search_left(sorted: &[f64], value: f64) -> usize {
    sorted.partition_point(|&probe| probe < value)
}

/// Index of the first element in `sorted` that is greater than `value`.
pub fn search_right(sorted: &[f64], value: f64) -> usize {
    sorted.partition_point(|&probe| probe <= value)
}
