//! Member and student registries.

use crate::macros::constant_registry;
use crate::patterns::{DNI, NIE, PASSPORT};
use swimdesk_validation::Pattern;

constant_registry! {
    /// Membership status of a club member.
    pub enum MemberState as "Member.States" {
        Active = "ACTIVE" => "Activo",
        Inactive = "INACTIVE" => "Baja",
        Suspended = "SUSPENDED" => "Suspendido",
    }
}

constant_registry! {
    /// Identity document types accepted for students.
    pub enum StudentIdType as "Student.IdTypes" {
        Dni = "DNI" => "DNI",
        Nie = "NIE" => "NIE",
        Passport = "PASSPORT" => "Pasaporte",
    }
}

constant_registry! {
    /// Swimming level of a student.
    pub enum SwimLevel as "Student.Levels" {
        Beginner = "BEGINNER" => "Iniciación",
        Intermediate = "INTERMEDIATE" => "Perfeccionamiento",
        Advanced = "ADVANCED" => "Avanzado",
        Competition = "COMPETITION" => "Competición",
    }
}

impl StudentIdType {
    /// Pattern a document number of this type must match.
    pub fn pattern(self) -> &'static Pattern {
        match self {
            Self::Dni => &DNI,
            Self::Nie => &NIE,
            Self::Passport => &PASSPORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swimdesk_validation::ConstantRegistry;

    #[test]
    fn id_types_resolve_their_patterns() {
        assert!(StudentIdType::Dni.pattern().is_match("12345678Z"));
        assert!(StudentIdType::Nie.pattern().is_match("X1234567L"));
        assert!(StudentIdType::Passport.pattern().is_match("PAB123456"));
        assert!(!StudentIdType::Dni.pattern().is_match("X1234567L"));
    }

    #[test]
    fn id_types_round_trip_keys() {
        for id_type in StudentIdType::ALL {
            assert_eq!(StudentIdType::from_key(id_type.key()), Some(*id_type));
        }
        assert_eq!(StudentIdType::from_key("CIF"), None);
    }
}
