/// Sorts `values` ascending and returns the result as a new sequence; the
/// input is never mutated.
///
/// Recursive quicksort with the last element as pivot. The partition is
/// three-way: values equal to the pivot are collected alongside it instead of
/// being dropped from the recursion, so every element of the input appears in
/// the output, duplicates included.
pub fn quicksort<T: PartialOrd + Clone>(values: &[T]) -> Vec<T> {
    if values.len() <= 1 {
        return values.to_vec();
    }
    let pivot = values[values.len() - 1].clone();
    let rest = &values[..values.len() - 1];
    let mut smaller: Vec<T> = Vec::new();
    let mut equal: Vec<T> = vec![pivot.clone()];
    let mut larger: Vec<T> = Vec::new();
    for value in rest {
        if *value < pivot {
            smaller.push(value.clone());
        } else if *value > pivot {
            larger.push(value.clone());
        } else {
            equal.push(value.clone());
        }
    }
    let mut sorted = quicksort(&smaller);
    sorted.append(&mut equal);
    sorted.append(&mut quicksort(&larger));
    sorted
}
