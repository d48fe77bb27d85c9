//! Survey and marketing-journey registries.

use crate::macros::constant_registry;

constant_registry! {
    /// Answer shape of a survey question.
    pub enum SurveyQuestionType as "Survey.QuestionTypes" {
        Text = "TEXT" => "Texto libre",
        Score = "SCORE" => "Puntuación",
        SingleChoice = "SINGLE_CHOICE" => "Opción única",
        MultipleChoice = "MULTIPLE_CHOICE" => "Opción múltiple",
    }
}

constant_registry! {
    /// Delivery channel of a journey step.
    pub enum JourneyChannel as "Journey.Channels" {
        Email = "EMAIL" => "Correo electrónico",
        Sms = "SMS" => "SMS",
        Push = "PUSH" => "Notificación",
        Whatsapp = "WHATSAPP" => "WhatsApp",
    }
}

constant_registry! {
    /// Lifecycle of a marketing journey.
    pub enum JourneyState as "Journey.States" {
        Draft = "DRAFT" => "Borrador",
        Active = "ACTIVE" => "Activo",
        Paused = "PAUSED" => "Pausado",
        Finished = "FINISHED" => "Finalizado",
    }
}
