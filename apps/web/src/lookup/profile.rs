use serde::Serialize;

use crate::data::models::CandidateTable;
use crate::locale::PROFILE_FIELDS;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileField {
    pub column: &'static str,
    pub label: &'static str,
    /// `None` when the column is absent from the table or the cell is blank.
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CandidateProfile {
    pub candidate_id: u64,
    pub fields: Vec<ProfileField>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileLookup {
    Found(CandidateProfile),
    NotFound,
}

/// Finds the candidate with `candidate_id`. Only the first matching row is used.
pub fn find_profile(candidate_id: u64, candidates: &CandidateTable) -> ProfileLookup {
    let Some(candidate) = candidates
        .candidates()
        .find(|c| c.candidate_id == candidate_id)
    else {
        return ProfileLookup::NotFound;
    };

    let fields = PROFILE_FIELDS
        .iter()
        .map(|&(column, label)| ProfileField {
            column,
            label,
            value: candidate.row.get(column).map(str::to_string),
        })
        .collect();

    ProfileLookup::Found(CandidateProfile {
        candidate_id,
        fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table::Table;

    fn candidates(src: &str) -> CandidateTable {
        CandidateTable::new(Table::from_reader(src.as_bytes()).unwrap())
    }

    fn value<'a>(profile: &'a CandidateProfile, column: &str) -> Option<&'a str> {
        profile
            .fields
            .iter()
            .find(|f| f.column == column)
            .and_then(|f| f.value.as_deref())
    }

    #[test]
    fn test_returns_row_at_position() {
        let table = candidates("user_name,industry\nAn,IT\nBinh,Finance\nChi,Retail\n");
        let ProfileLookup::Found(profile) = find_profile(1, &table) else {
            panic!("candidate 1 should exist");
        };
        assert_eq!(profile.candidate_id, 1);
        assert_eq!(value(&profile, "user_name"), Some("Binh"));
        assert_eq!(value(&profile, "industry"), Some("Finance"));
    }

    #[test]
    fn test_every_position_resolves_to_itself() {
        let table = candidates("user_name\nAn\nBinh\nChi\n");
        for (id, name) in ["An", "Binh", "Chi"].iter().enumerate() {
            let ProfileLookup::Found(profile) = find_profile(id as u64, &table) else {
                panic!("candidate {id} should exist");
            };
            assert_eq!(value(&profile, "user_name"), Some(*name));
        }
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let table = candidates("user_name\nAn\n");
        assert_eq!(find_profile(1, &table), ProfileLookup::NotFound);
        assert_eq!(find_profile(u64::MAX, &table), ProfileLookup::NotFound);
    }

    #[test]
    fn test_missing_columns_are_none_in_fixed_order() {
        let table = candidates("user_name\nAn\n");
        let ProfileLookup::Found(profile) = find_profile(0, &table) else {
            panic!("candidate 0 should exist");
        };
        let columns: Vec<_> = profile.fields.iter().map(|f| f.column).collect();
        assert_eq!(
            columns,
            vec![
                "user_name",
                "desired_job_translated",
                "industry",
                "workplace_desired"
            ]
        );
        assert_eq!(value(&profile, "workplace_desired"), None);
    }
}
