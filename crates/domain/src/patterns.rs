//! Shared field patterns.

use swimdesk_validation::Pattern;

/// Short alphanumeric codes (pools, courses, promotions).
pub static CODE: Pattern = Pattern::new(
    r"^[a-zA-Z0-9-_]{1,40}$",
    "solo puede contener letras, números, guiones y guiones bajos",
);

/// Phone numbers with an optional leading `+`.
pub static PHONE: Pattern = Pattern::new(
    r"^\+?[0-9]{9,15}$",
    "debe tener entre 9 y 15 dígitos, con prefijo + opcional",
);

/// E-mail addresses.
pub static EMAIL: Pattern = Pattern::new(
    r"^[^@\s]+@[^@\s]+\.[^@\s]+$",
    "debe ser una dirección de correo electrónico",
);

/// Spanish postal codes.
pub static POSTAL_CODE: Pattern = Pattern::new(r"^\d{5}$", "debe tener cinco dígitos");

/// `HH:MM` in 24-hour format.
pub static TIME_OF_DAY: Pattern = Pattern::new(
    r"^([01]\d|2[0-3]):[0-5]\d$",
    "debe tener el formato HH:MM",
);

/// IBAN without spaces.
pub static IBAN: Pattern = Pattern::new(
    r"^[A-Z]{2}\d{2}[A-Z0-9]{11,30}$",
    "debe ser un IBAN sin espacios",
);

/// Spanish national identity document.
pub static DNI: Pattern = Pattern::new(
    r"^\d{8}[A-Z]$",
    "debe tener ocho dígitos seguidos de una letra mayúscula",
);

/// Foreigner identity number.
pub static NIE: Pattern = Pattern::new(
    r"^[XYZ]\d{7}[A-Z]$",
    "debe empezar por X, Y o Z seguida de siete dígitos y una letra mayúscula",
);

/// Passport numbers.
pub static PASSPORT: Pattern = Pattern::new(
    r"^[A-Z0-9]{5,20}$",
    "debe tener entre 5 y 20 letras mayúsculas o dígitos",
);

/// Every pattern declared in this module.
pub fn all_patterns() -> [&'static Pattern; 9] {
    [
        &CODE,
        &PHONE,
        &EMAIL,
        &POSTAL_CODE,
        &TIME_OF_DAY,
        &IBAN,
        &DNI,
        &NIE,
        &PASSPORT,
    ]
}
