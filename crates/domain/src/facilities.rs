//! Pools, courses and scheduling registries.

use crate::macros::constant_registry;

constant_registry! {
    /// Kind of pool.
    pub enum PoolType as "Pool.Types" {
        Indoor = "INDOOR" => "Cubierta",
        Outdoor = "OUTDOOR" => "Descubierta",
        Teaching = "TEACHING" => "Vaso de enseñanza",
    }
}

constant_registry! {
    /// How course places are counted.
    pub enum CourseCapacityType as "Course.CapacityTypes" {
        Fixed = "FIXED" => "Plazas fijas por curso",
        PerSession = "PER_SESSION" => "Plazas por sesión",
    }
}

constant_registry! {
    /// Days of the week used by schedules.
    pub enum WeekDay as "Schedule.WeekDays" {
        Monday = "MONDAY" => "Lunes",
        Tuesday = "TUESDAY" => "Martes",
        Wednesday = "WEDNESDAY" => "Miércoles",
        Thursday = "THURSDAY" => "Jueves",
        Friday = "FRIDAY" => "Viernes",
        Saturday = "SATURDAY" => "Sábado",
        Sunday = "SUNDAY" => "Domingo",
    }
}

constant_registry! {
    /// Attendance mark for a session.
    pub enum AttendanceState as "Attendance.States" {
        Present = "PRESENT" => "Asiste",
        Absent = "ABSENT" => "Falta",
        Justified = "JUSTIFIED" => "Falta justificada",
        Late = "LATE" => "Retraso",
    }
}
