use crate::domain::model::StemLeafMap;

/// Groups values by stem (`n / 10`), collecting leaves (`n % 10`) in input order.
pub fn group_by_stem(numbers: &[u64]) -> StemLeafMap {
    let mut map = StemLeafMap::new();
    for &n in numbers {
        map.push(n / 10, n % 10);
    }
    map
}
