// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Set operations over sorted, duplicate free slices.

// Assumes both vectors are sorted.
pub fn union<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: PartialOrd + Copy,
{
    let mut c: Vec<T> = Vec::with_capacity(a.len() + b.len());
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        if a[ap] < b[bp] {
            c.push(a[ap]);
            ap += 1;
        } else if b[bp] < a[ap] {
            c.push(b[bp]);
            bp += 1;
        } else {
            c.push(a[ap]);
            ap += 1;
            bp += 1;
        }
    }
    c.extend_from_slice(&a[ap..]);
    c.extend_from_slice(&b[bp..]);
    c
}

// Items in a that aren't in b. Both sorted.
pub fn difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: PartialOrd + Copy,
{
    let mut c: Vec<T> = Vec::with_capacity(a.len());
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        if a[ap] < b[bp] {
            c.push(a[ap]);
            ap += 1;
        } else if b[bp] < a[ap] {
            bp += 1;
        } else {
            ap += 1;
            bp += 1;
        }
    }
    c.extend_from_slice(&a[ap..]);
    c
}

// True if every element of needle is in haystack. Both sorted.
pub fn is_subset<T>(needle: &[T], haystack: &[T]) -> bool
where
    T: PartialOrd,
{
    if needle.len() > haystack.len() {
        return false;
    }
    let mut hp = 0;
    for n in needle {
        while hp < haystack.len() && haystack[hp] < *n {
            hp += 1;
        }
        if hp == haystack.len() || haystack[hp] != *n {
            return false;
        }
        hp += 1;
    }
    true
}

pub fn split_out_item<T>(items: &[T], item: &T) -> Vec<T>
where
    T: PartialEq + Clone,
{
    items.iter().filter(|x| *x != item).cloned().collect()
}

#[cfg(test)]
mod tests {
    use crate::item::Item;
    fn to_item_vec(nums: &[u32]) -> Vec<Item> {
        nums.iter().map(|i| Item::with_id(*i)).collect()
    }

    #[test]
    fn test_union() {
        use super::union;

        let test_cases: Vec<(Vec<Item>, Vec<Item>, Vec<Item>)> = [
            (vec![1, 2, 3], vec![4, 5, 6], vec![1, 2, 3, 4, 5, 6]),
            (vec![1, 2, 3], vec![3, 4, 5, 6], vec![1, 2, 3, 4, 5, 6]),
            (vec![1, 2, 4], vec![1, 2, 5], vec![1, 2, 4, 5]),
            (vec![], vec![1], vec![1]),
            (vec![1], vec![], vec![1]),
        ]
        .iter()
        .map(|(a, b, u)| (to_item_vec(a), to_item_vec(b), to_item_vec(u)))
        .collect();

        for (a, b, c) in &test_cases {
            assert_eq!(&union(a, b), c);
        }
    }

    #[test]
    fn test_difference() {
        use super::difference;
        let cases: Vec<(Vec<u32>, Vec<u32>, Vec<u32>)> = vec![
            (vec![1, 2, 3], vec![2], vec![1, 3]),
            (vec![1, 2, 3], vec![1, 3], vec![2]),
            (vec![1, 2, 3], vec![], vec![1, 2, 3]),
            (vec![1, 2], vec![1, 2], vec![]),
            (vec![2, 4], vec![1, 3, 5], vec![2, 4]),
        ];
        for (a, b, expected) in cases {
            assert_eq!(difference(&a, &b), expected);
        }
    }

    #[test]
    fn test_is_subset() {
        use super::is_subset;
        assert!(is_subset::<u32>(&[], &[1, 2]));
        assert!(is_subset(&[1, 3], &[1, 2, 3]));
        assert!(is_subset(&[1, 2, 3], &[1, 2, 3]));
        assert!(!is_subset(&[1, 4], &[1, 2, 3]));
        assert!(!is_subset(&[0], &[1, 2, 3]));
        assert!(!is_subset(&[1, 2, 3, 4], &[1, 2, 3]));
    }

    #[test]
    fn test_split_out_item() {
        use super::split_out_item;
        let cases: Vec<(Vec<Item>, Item, Vec<Item>)> = [
            (vec![1], 1, vec![]),
            (vec![1, 2, 3], 1, vec![2, 3]),
            (vec![1, 2, 3], 2, vec![1, 3]),
            (vec![1, 2, 3], 3, vec![1, 2]),
        ]
        .iter()
        .map(|(a, v, b)| (to_item_vec(a), Item::with_id(*v), to_item_vec(b)))
        .collect();

        for (a, v, b) in cases {
            assert_eq!(split_out_item(&a, &v), b);
        }
    }
}
