use super::*;

#[test]
fn can_use_parallel_collect() {
    let source = vec![1, 2, 3];

    let result = parallel_collect(&source, |item| item * 2);

    assert_eq!(result, vec![2, 4, 6]);
}

#[test]
fn can_preserve_source_order() {
    let source: Vec<usize> = (0..128).collect();

    let result = parallel_into_collect(source.clone(), |item| item);

    assert_eq!(result, source);
}
