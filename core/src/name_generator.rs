//! Deterministic display-name generation for roster rows.
//!
//! Personal cohorts get "First Last" account holders; business cohorts
//! get company names. Same RNG seed = same names.

use crate::rng::StreamRng;

pub struct NameGenerator;

impl NameGenerator {
    /// Generate a personal account-holder name.
    pub fn account_holder_name(rng: &mut StreamRng) -> String {
        let first = Self::pick(rng, Self::first_names());
        let last = Self::pick(rng, Self::last_names());
        format!("{} {}", first, last)
    }

    /// Generate a company account name.
    /// Format: "Root Suffix" or "LastName Suffix".
    pub fn company_name(rng: &mut StreamRng) -> String {
        let suffix = Self::pick(rng, Self::company_suffixes());
        if rng.chance(0.5) {
            format!("{} {}", Self::pick(rng, Self::company_roots()), suffix)
        } else {
            format!("{} {}", Self::pick(rng, Self::last_names()), suffix)
        }
    }

    fn pick(rng: &mut StreamRng, pool: &'static [&'static str]) -> &'static str {
        pool[rng.next_u64_below(pool.len() as u64) as usize]
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "Ada", "Bennett", "Camila", "Darius", "Elena", "Felix", "Greta", "Hassan",
            "Imogen", "Jonah", "Katya", "Leo", "Marisol", "Nikhil", "Opal", "Priya",
            "Quentin", "Rosa", "Silas", "Tamsin", "Umar", "Vera", "Wendell", "Ximena",
            "Yusuf", "Zadie", "Anton", "Bridget", "Caleb", "Dahlia", "Emmett", "Farah",
            "Gideon", "Harriet", "Ivo", "June", "Kofi", "Lucia", "Magnus", "Noor",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Abbott", "Barlow", "Calloway", "Dempsey", "Eastman", "Farrow", "Goddard",
            "Hollis", "Ingram", "Joiner", "Kendrick", "Lockhart", "Mercer", "Navarro",
            "Okafor", "Pemberton", "Quill", "Rafferty", "Sandoval", "Thackeray",
            "Ueda", "Valdez", "Whitaker", "Xiang", "Yardley", "Zamora", "Ashford",
            "Brightwater", "Cormier", "Delacroix", "Ellery", "Fontaine", "Granger",
            "Hawthorne", "Iverson", "Jennings", "Kessler", "Lindqvist", "Moreau", "Nash",
        ]
    }

    fn company_roots() -> &'static [&'static str] {
        &[
            "Northwind", "Bluepeak", "Emberline", "Cascade", "Halcyon", "Quartzite",
            "Redwood", "Lumen", "Saltgrass", "Tidewater", "Vantage", "Wrenfield",
            "Arcturus", "Birchbark", "Coppermine", "Driftwood", "Everhart", "Foxglove",
            "Granite", "Harborview", "Ironwood", "Juniper", "Kelpline", "Larkspur",
        ]
    }

    fn company_suffixes() -> &'static [&'static str] {
        &[
            "Labs", "Systems", "Holdings", "Group", "Networks", "Partners", "Media",
            "Logistics", "Analytics", "Outfitters", "Supply", "Studio",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RngBank, StreamSlot};

    #[test]
    fn name_generation_is_deterministic() {
        let mut rng_a = RngBank::new(12345).for_stream(StreamSlot::Names);
        let mut rng_b = RngBank::new(12345).for_stream(StreamSlot::Names);

        let name_a = NameGenerator::account_holder_name(&mut rng_a);
        let name_b = NameGenerator::account_holder_name(&mut rng_b);

        assert_eq!(name_a, name_b, "Same seed should produce same name");
    }

    #[test]
    fn generates_valid_account_holder_names() {
        let mut rng = RngBank::new(12345).for_stream(StreamSlot::Names);

        for _ in 0..100 {
            let name = NameGenerator::account_holder_name(&mut rng);
            let parts: Vec<&str> = name.split_whitespace().collect();
            assert_eq!(parts.len(), 2, "Name should have exactly 2 parts: {}", name);
            assert!(!parts[0].is_empty(), "First name should not be empty");
            assert!(!parts[1].is_empty(), "Last name should not be empty");
        }
    }

    #[test]
    fn generates_valid_company_names() {
        let mut rng = RngBank::new(777).for_stream(StreamSlot::Names);

        for _ in 0..50 {
            let name = NameGenerator::company_name(&mut rng);
            let parts: Vec<&str> = name.split_whitespace().collect();
            assert_eq!(parts.len(), 2, "Company name should have 2 parts: {}", name);
        }
    }
}
