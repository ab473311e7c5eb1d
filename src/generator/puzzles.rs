/*
puzzles.rs

Copyright 2026 PuzzleWorld contributors

This file is part of PuzzleWorld.

PuzzleWorld is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

PuzzleWorld is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
PuzzleWorld. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Word and number puzzles.
//!
//! All the puzzles of a world are prepared once, when the world is built, and then handed out in
//! a fixed order. Word puzzles ask the player to unscramble a word. Number puzzles show the first
//! four terms of an arithmetic or geometric sequence and ask for the fifth one.
//!
//! Word puzzles and number puzzles each have their own cursor. Asking for the next puzzle returns
//! the puzzle at the cursor and moves the cursor forward, wrapping around at the end of the list.

use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::rng::WorldRng;

/// Default number of number puzzles to prepare.
pub const DEFAULT_NUMBER_PUZZLES: usize = 50;

/// Number of terms shown to the player.
const SHOWN_TERMS: u32 = 4;

/// First term of the number sequences.
const START_RANGE: RangeInclusive<u64> = 1..=9;

/// Difference (arithmetic) or ratio (geometric) of the number sequences.
const STEP_RANGE: RangeInclusive<u64> = 2..=5;

/// Kind of number sequence.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// `start + i * step`
    Arithmetic,

    /// `start * step^i`
    Geometric,
}

impl Pattern {
    /// Return the term at index `i` (the first term has index 0).
    pub fn term(&self, start: u64, step: u64, i: u32) -> u64 {
        match self {
            Pattern::Arithmetic => start + u64::from(i) * step,
            Pattern::Geometric => start * step.pow(i),
        }
    }
}

/// Kind of puzzle.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PuzzleKind {
    Word,
    Number(Pattern),
}

/// A prepared puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PuzzleRecord {
    pub kind: PuzzleKind,

    /// Text shown to the player: the scrambled word, or the sequence such as `"3, 5, 7, 9, ?"`.
    pub prompt: String,

    /// Expected answer, in lowercase.
    pub answer: String,
}

impl PuzzleRecord {
    /// Create a word puzzle by shuffling the letters of the word.
    pub fn word(word: &str, rng: &mut WorldRng) -> Self {
        let answer: String = word.trim().to_lowercase();
        let mut letters: Vec<char> = answer.chars().collect();
        rng.shuffle(&mut letters);

        Self {
            kind: PuzzleKind::Word,
            prompt: letters.into_iter().collect(),
            answer,
        }
    }

    /// Create a random number puzzle.
    pub fn number(rng: &mut WorldRng) -> Self {
        // Both patterns are listed, so the choice always succeeds
        let pattern: Pattern = rng
            .choose(&[Pattern::Arithmetic, Pattern::Geometric])
            .unwrap_or(Pattern::Arithmetic);
        let start: u64 = rng.range(START_RANGE);
        let step: u64 = rng.range(STEP_RANGE);

        let terms: Vec<String> = (0..SHOWN_TERMS)
            .map(|i| pattern.term(start, step, i).to_string())
            .collect();

        Self {
            kind: PuzzleKind::Number(pattern),
            prompt: format!("{}, ?", terms.join(", ")),
            answer: pattern.term(start, step, SHOWN_TERMS).to_string(),
        }
    }

    /// Whether the guess solves the puzzle. Case and surrounding spaces are ignored.
    pub fn is_solution(&self, guess: &str) -> bool {
        guess.trim().to_lowercase() == self.answer
    }

    /// Whether the prompt leads to the answer: a word prompt holds the letters of the answer, and
    /// a number prompt lists the first terms of the sequence that the answer continues.
    pub fn is_consistent(&self) -> bool {
        match self.kind {
            PuzzleKind::Word => {
                self.answer == self.answer.to_lowercase()
                    && sorted_letters(&self.prompt) == sorted_letters(&self.answer)
            }
            PuzzleKind::Number(pattern) => {
                let Some(shown) = self.prompt.strip_suffix(", ?") else {
                    return false;
                };
                let Ok(mut terms) = shown
                    .split(", ")
                    .map(str::parse)
                    .collect::<Result<Vec<u64>, _>>()
                else {
                    return false;
                };
                let Ok(answer) = self.answer.parse::<u64>() else {
                    return false;
                };
                if terms.len() != SHOWN_TERMS as usize {
                    return false;
                }
                terms.push(answer);

                let start: u64 = terms[0];
                if !START_RANGE.contains(&start) {
                    return false;
                }
                let step: u64 = match pattern {
                    Pattern::Arithmetic => terms[1].saturating_sub(start),
                    Pattern::Geometric => terms[1] / start,
                };
                // Bounded start and step keep the terms far from overflowing
                STEP_RANGE.contains(&step)
                    && terms
                        .iter()
                        .zip(0..)
                        .all(|(t, i)| *t == pattern.term(start, step, i))
            }
        }
    }
}

fn sorted_letters(s: &str) -> Vec<char> {
    let mut letters: Vec<char> = s.chars().collect();
    letters.sort_unstable();
    letters
}

/// Prepared puzzles and their cursors.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PuzzleSequence {
    words: Vec<PuzzleRecord>,
    numbers: Vec<PuzzleRecord>,

    /// Index of the next word puzzle.
    word_cursor: usize,

    /// Index of the next number puzzle.
    number_cursor: usize,
}

impl PuzzleSequence {
    /// Prepare the puzzles.
    ///
    /// The word list is copied and shuffled, then each word is scrambled. The number puzzles are
    /// drawn after the word puzzles, from the same random stream.
    pub fn prepare<S: AsRef<str>>(words: &[S], number_count: usize, rng: &mut WorldRng) -> Self {
        let mut shuffled: Vec<&str> = words.iter().map(|w| w.as_ref()).collect();
        rng.shuffle(&mut shuffled);

        let words: Vec<PuzzleRecord> = shuffled
            .into_iter()
            .map(|w| PuzzleRecord::word(w, rng))
            .collect();
        let numbers: Vec<PuzzleRecord> = (0..number_count)
            .map(|_| PuzzleRecord::number(rng))
            .collect();

        debug!(
            "Prepared {} word puzzle(s) and {} number puzzle(s)",
            words.len(),
            numbers.len()
        );
        Self {
            words,
            numbers,
            word_cursor: 0,
            number_cursor: 0,
        }
    }

    /// Return the next word puzzle, or [`None`] if there are no word puzzles.
    pub fn next_word_puzzle(&mut self) -> Option<&PuzzleRecord> {
        next_in(&self.words, &mut self.word_cursor)
    }

    /// Return the next number puzzle, or [`None`] if there are no number puzzles.
    pub fn next_number_puzzle(&mut self) -> Option<&PuzzleRecord> {
        next_in(&self.numbers, &mut self.number_cursor)
    }

    /// Move both cursors back to the first puzzle.
    pub fn reset(&mut self) {
        self.word_cursor = 0;
        self.number_cursor = 0;
    }

    /// All the word puzzles, in the order they are handed out.
    pub fn word_puzzles(&self) -> &[PuzzleRecord] {
        &self.words
    }

    /// All the number puzzles, in the order they are handed out.
    pub fn number_puzzles(&self) -> &[PuzzleRecord] {
        &self.numbers
    }

    /// Whether every record is consistent and sits in the list of its kind.
    pub fn is_consistent(&self) -> bool {
        self.words
            .iter()
            .all(|r| r.kind == PuzzleKind::Word && r.is_consistent())
            && self
                .numbers
                .iter()
                .all(|r| matches!(r.kind, PuzzleKind::Number(_)) && r.is_consistent())
    }
}

/// Return the record at the cursor and move the cursor forward.
fn next_in<'a>(list: &'a [PuzzleRecord], cursor: &mut usize) -> Option<&'a PuzzleRecord> {
    if list.is_empty() {
        return None;
    }
    let record: &PuzzleRecord = &list[*cursor % list.len()];
    *cursor = (*cursor + 1) % list.len();
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 6] = ["Lantern", "compass", "cavern", "torch", "rope", "map"];

    fn parse_terms(prompt: &str) -> Vec<u64> {
        prompt
            .trim_end_matches(", ?")
            .split(", ")
            .map(|t| t.parse().expect("terms are integers"))
            .collect()
    }

    #[test]
    fn word_prompts_are_anagrams_of_the_answers() {
        let sequence = PuzzleSequence::prepare(&WORDS, 0, &mut WorldRng::new(1));

        assert_eq!(sequence.word_puzzles().len(), WORDS.len());
        for record in sequence.word_puzzles() {
            assert_eq!(record.kind, PuzzleKind::Word);
            assert_eq!(sorted_letters(&record.prompt), sorted_letters(&record.answer));
            assert_eq!(record.answer, record.answer.to_lowercase());
        }

        let mut answers: Vec<&str> = sequence
            .word_puzzles()
            .iter()
            .map(|r| r.answer.as_str())
            .collect();
        answers.sort_unstable();
        assert_eq!(
            answers,
            vec!["cavern", "compass", "lantern", "map", "rope", "torch"]
        );
    }

    #[test]
    fn number_answers_follow_the_pattern() {
        let sequence = PuzzleSequence::prepare(&WORDS, 100, &mut WorldRng::new(2));

        assert_eq!(sequence.number_puzzles().len(), 100);
        for record in sequence.number_puzzles() {
            let terms: Vec<u64> = parse_terms(&record.prompt);
            assert_eq!(terms.len(), SHOWN_TERMS as usize);
            assert!(START_RANGE.contains(&terms[0]));

            let answer: u64 = record.answer.parse().expect("answer is an integer");
            match record.kind {
                PuzzleKind::Number(Pattern::Arithmetic) => {
                    let step: u64 = terms[1] - terms[0];
                    assert!(STEP_RANGE.contains(&step));
                    assert!(terms.windows(2).all(|w| w[1] - w[0] == step));
                    assert_eq!(answer, terms[3] + step);
                }
                PuzzleKind::Number(Pattern::Geometric) => {
                    let ratio: u64 = terms[1] / terms[0];
                    assert!(STEP_RANGE.contains(&ratio));
                    assert!(terms.windows(2).all(|w| w[1] == w[0] * ratio));
                    assert_eq!(answer, terms[3] * ratio);
                }
                PuzzleKind::Word => panic!("word puzzle in the number list"),
            }
        }
    }

    #[test]
    fn prepared_puzzles_are_consistent() {
        let sequence = PuzzleSequence::prepare(&WORDS, 100, &mut WorldRng::new(6));

        assert!(sequence.is_consistent());
    }

    #[test]
    fn mismatched_puzzles_are_inconsistent() {
        let word = PuzzleRecord {
            kind: PuzzleKind::Word,
            prompt: "ptoc".to_string(),
            answer: "torch".to_string(),
        };
        assert!(!word.is_consistent());

        let number = |prompt: &str, answer: &str| PuzzleRecord {
            kind: PuzzleKind::Number(Pattern::Arithmetic),
            prompt: prompt.to_string(),
            answer: answer.to_string(),
        };
        assert!(number("3, 5, 7, 9, ?", "11").is_consistent());
        assert!(!number("3, 5, 7, 9, ?", "12").is_consistent());
        assert!(!number("3, 5, 8, 9, ?", "11").is_consistent());
        assert!(!number("3, 5, 7, ?", "9").is_consistent());
        assert!(!number("3, 5, 7, 9", "11").is_consistent());
        assert!(!number("0, 5, 10, 15, ?", "20").is_consistent());

        let geometric = PuzzleRecord {
            kind: PuzzleKind::Number(Pattern::Geometric),
            prompt: "3, 6, 12, 24, ?".to_string(),
            answer: "48".to_string(),
        };
        assert!(geometric.is_consistent());
    }

    #[test]
    fn patterns() {
        assert_eq!(Pattern::Arithmetic.term(3, 2, 0), 3);
        assert_eq!(Pattern::Arithmetic.term(3, 2, 4), 11);
        assert_eq!(Pattern::Geometric.term(3, 2, 0), 3);
        assert_eq!(Pattern::Geometric.term(3, 2, 4), 48);
    }

    #[test]
    fn cursors_wrap_around_independently() {
        let mut sequence = PuzzleSequence::prepare(&WORDS, 3, &mut WorldRng::new(3));
        let words: Vec<PuzzleRecord> = sequence.word_puzzles().to_vec();
        let numbers: Vec<PuzzleRecord> = sequence.number_puzzles().to_vec();

        for expected in &words {
            assert_eq!(sequence.next_word_puzzle(), Some(expected));
        }
        // Back to the first puzzle
        assert_eq!(sequence.next_word_puzzle(), Some(&words[0]));

        // The number cursor did not move
        assert_eq!(sequence.next_number_puzzle(), Some(&numbers[0]));
        assert_eq!(sequence.next_number_puzzle(), Some(&numbers[1]));

        sequence.reset();
        assert_eq!(sequence.next_word_puzzle(), Some(&words[0]));
        assert_eq!(sequence.next_number_puzzle(), Some(&numbers[0]));
    }

    #[test]
    fn empty_lists_have_no_puzzles() {
        let empty: [&str; 0] = [];
        let mut sequence = PuzzleSequence::prepare(&empty, 0, &mut WorldRng::new(4));

        assert_eq!(sequence.next_word_puzzle(), None);
        assert_eq!(sequence.next_number_puzzle(), None);
    }

    #[test]
    fn same_seed_prepares_the_same_puzzles() {
        let first = PuzzleSequence::prepare(&WORDS, 10, &mut WorldRng::new(5));
        let second = PuzzleSequence::prepare(&WORDS, 10, &mut WorldRng::new(5));

        assert_eq!(first, second);
    }

    #[test]
    fn guesses_ignore_case_and_spaces() {
        let record = PuzzleRecord {
            kind: PuzzleKind::Word,
            prompt: "nrltena".to_string(),
            answer: "lantern".to_string(),
        };

        assert!(record.is_solution("lantern"));
        assert!(record.is_solution("  LanTern \n"));
        assert!(!record.is_solution("lanterns"));

        let record = PuzzleRecord {
            kind: PuzzleKind::Number(Pattern::Arithmetic),
            prompt: "2, 4, 6, 8, ?".to_string(),
            answer: "10".to_string(),
        };
        assert!(record.is_solution(" 10"));
        assert!(!record.is_solution("12"));
    }
}
