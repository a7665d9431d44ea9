use crate::domain::model::{Roster, SlotAssignment, Student};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub const DEFAULT_SESSION_COUNT: usize = 7;

/// Shuffles the roster with a generator seeded by `seed`, deals students
/// round-robin into `session_count` slots and returns the slots in reverse
/// fill order.
///
/// The result is reproducible for a given roster order and seed. It is not
/// meant to match generators of other implementations bit for bit.
pub fn assign_students(roster: &Roster, seed: i64, session_count: usize) -> SlotAssignment {
    let mut rng = StdRng::seed_from_u64(seed_bits(seed));
    let mut students: Vec<Student> = roster.students().to_vec();
    students.shuffle(&mut rng);

    let mut slots: Vec<Vec<Student>> = vec![Vec::new(); session_count];
    if session_count == 0 {
        return SlotAssignment::new(slots);
    }

    for (i, student) in students.into_iter().enumerate() {
        slots[i % session_count].push(student);
    }

    slots.reverse();
    SlotAssignment::new(slots)
}

/// Two's complement reinterpretation, so every `i64` keys a distinct generator.
fn seed_bits(seed: i64) -> u64 {
    seed as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;

    fn roster_of(n: usize) -> Roster {
        (0..n)
            .map(|i| Student::from(format!("Student {}", i).as_str()))
            .collect()
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let roster = roster_of(23);

        let first = assign_students(&roster, 42, DEFAULT_SESSION_COUNT);
        let second = assign_students(&roster, 42, DEFAULT_SESSION_COUNT);

        assert_eq!(first, second);
    }

    #[test]
    fn test_roster_is_not_mutated() {
        let roster = roster_of(10);
        let before = roster.clone();

        let _ = assign_students(&roster, 7, DEFAULT_SESSION_COUNT);

        assert_eq!(roster, before);
    }

    #[test]
    fn test_slot_sizes_are_balanced() {
        for n in 0..50 {
            let roster = roster_of(n);
            let assignment = assign_students(&roster, 1234, DEFAULT_SESSION_COUNT);

            assert_eq!(assignment.slot_count(), DEFAULT_SESSION_COUNT);
            assert_eq!(assignment.student_count(), n);

            let base = n / DEFAULT_SESSION_COUNT;
            for slot in assignment.slots() {
                assert!(slot.len() == base || slot.len() == base + 1);
            }
        }
    }

    #[test]
    fn test_every_student_appears_exactly_once() {
        let roster = roster_of(31);
        let assignment = assign_students(&roster, 99, DEFAULT_SESSION_COUNT);

        let mut assigned: Vec<String> = assignment
            .slots()
            .iter()
            .flatten()
            .map(|s| s.to_string())
            .collect();
        let mut expected: Vec<String> = roster.students().iter().map(|s| s.to_string()).collect();
        assigned.sort();
        expected.sort();

        assert_eq!(assigned, expected);
    }

    #[test]
    fn test_round_robin_then_reversed() {
        let roster = roster_of(7);
        let seed = 2024;

        // 以相同的 seed 重現 shuffle 順序
        let mut rng = StdRng::seed_from_u64(seed_bits(seed));
        let mut shuffled = roster.students().to_vec();
        shuffled.shuffle(&mut rng);

        let assignment = assign_students(&roster, seed, DEFAULT_SESSION_COUNT);

        for (i, student) in shuffled.iter().enumerate() {
            assert_eq!(assignment.slots()[6 - i], vec![student.clone()]);
        }
    }

    #[test]
    fn test_later_students_wrap_around() {
        let roster = roster_of(9);
        let seed = 5;

        let mut rng = StdRng::seed_from_u64(seed_bits(seed));
        let mut shuffled = roster.students().to_vec();
        shuffled.shuffle(&mut rng);

        let assignment = assign_students(&roster, seed, DEFAULT_SESSION_COUNT);

        // index 7 與 8 回到 bucket 0 與 1，反轉後位於最後兩個 slot
        assert_eq!(assignment.slots()[6], vec![shuffled[0].clone(), shuffled[7].clone()]);
        assert_eq!(assignment.slots()[5], vec![shuffled[1].clone(), shuffled[8].clone()]);
        assert_eq!(assignment.slots()[0], vec![shuffled[6].clone()]);
    }

    #[test]
    fn test_negative_seed_is_deterministic() {
        let roster = roster_of(14);

        let first = assign_students(&roster, -5, DEFAULT_SESSION_COUNT);
        let second = assign_students(&roster, -5, DEFAULT_SESSION_COUNT);

        assert_eq!(first, second);
        assert_eq!(first.student_count(), 14);
        assert_eq!(seed_bits(-1), u64::MAX);
        assert_ne!(seed_bits(-5), seed_bits(5));
    }

    #[test]
    fn test_empty_roster_yields_empty_slots() {
        let assignment = assign_students(&Roster::default(), 0, DEFAULT_SESSION_COUNT);

        assert_eq!(assignment.slot_count(), 7);
        assert!(assignment.slots().iter().all(Vec::is_empty));
    }

    #[test]
    fn test_custom_session_count() {
        let assignment = assign_students(&roster_of(10), 3, 3);

        assert_eq!(assignment.slot_count(), 3);
        let sizes: Vec<usize> = assignment.slots().iter().map(Vec::len).collect();
        // bucket 大小 [4, 3, 3] 反轉
        assert_eq!(sizes, vec![3, 3, 4]);
    }
}
