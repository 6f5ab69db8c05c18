use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::health;
use crate::user::date_format;

/// Questionnaire submitted to `POST /api/settings/onboarding`.
///
/// The backend reads a flat camelCase form; each section flattens into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingPayload {
    #[serde(flatten)]
    pub diet: DietSection,
    #[serde(flatten)]
    pub activity: ActivitySection,
    #[serde(flatten)]
    pub health_monitoring: HealthMonitoringSection,
    #[serde(flatten)]
    pub personal_data: PersonalDataSection,
}

/// 饮食计划。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietSection {
    #[serde(rename = "diasFrutasSemana")]
    pub fruit_days_per_week: u8,
    // The backend reads this exact (misspelled) key.
    #[serde(rename = "diasVerdurasEmana")]
    pub vegetable_days_per_week: u8,
    #[serde(rename = "diasComidaRapidaSemana")]
    pub fast_food_days_per_week: u8,
}

/// 体育活动。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySection {
    #[serde(rename = "diasEjercicioSemana")]
    pub exercise_days_per_week: u8,
    #[serde(rename = "minutosEjercicioDia")]
    pub minutes_per_day: u16,
    #[serde(rename = "tipoEjercicio")]
    pub intensity: ExerciseIntensity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseIntensity {
    #[serde(rename = "leve")]
    Light,
    #[serde(rename = "moderado")]
    Moderate,
    #[serde(rename = "intenso")]
    Intense,
}

/// 健康监测。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthMonitoringSection {
    #[serde(rename = "diasControlGlucosaSemana")]
    pub glucose_checks_per_week: u8,
    #[serde(rename = "diasRevisionPiesSemana")]
    pub foot_checks_per_week: u8,
    #[serde(rename = "tomasMedicamentos")]
    pub medication_adherence: MedicationAdherence,
    #[serde(rename = "visitaMedicoRegular")]
    pub regular_doctor_visits: bool,
    #[serde(rename = "controlEnfermedades")]
    pub conditions_under_control: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MedicationAdherence {
    #[serde(rename = "siempre")]
    Always,
    #[serde(rename = "casi-siempre")]
    AlmostAlways,
    #[serde(rename = "ocasionalmente")]
    Occasionally,
    #[serde(rename = "nunca")]
    Never,
}

/// 个人数据。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalDataSection {
    #[serde(rename = "peso")]
    pub weight_kg: f64,
    #[serde(rename = "altura")]
    pub height_cm: f64,
    #[serde(rename = "imc")]
    pub bmi: f64,
    #[serde(rename = "fechaNacimiento", default, with = "date_format")]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "sexo")]
    pub sex: Sex,
    #[serde(rename = "actividadLaboral")]
    pub work_activity: WorkActivity,
    #[serde(rename = "historialFamiliar")]
    pub family_history: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "masculino")]
    Male,
    #[serde(rename = "femenino")]
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkActivity {
    #[serde(rename = "sedentario")]
    Sedentary,
    #[serde(rename = "moderado")]
    Moderate,
    #[serde(rename = "activo")]
    Active,
}

impl OnboardingPayload {
    /// Form defaults shown to a new user, with the birth date taken from the
    /// profile when known.
    pub fn with_defaults(birth_date: Option<NaiveDate>) -> Self {
        let mut payload = Self {
            diet: DietSection {
                fruit_days_per_week: 3,
                vegetable_days_per_week: 3,
                fast_food_days_per_week: 2,
            },
            activity: ActivitySection {
                exercise_days_per_week: 2,
                minutes_per_day: 30,
                intensity: ExerciseIntensity::Moderate,
            },
            health_monitoring: HealthMonitoringSection {
                glucose_checks_per_week: 0,
                foot_checks_per_week: 0,
                medication_adherence: MedicationAdherence::Always,
                regular_doctor_visits: true,
                conditions_under_control: true,
            },
            personal_data: PersonalDataSection {
                weight_kg: 70.0,
                height_cm: 170.0,
                bmi: 0.0,
                birth_date,
                sex: Sex::Male,
                work_activity: WorkActivity::Sedentary,
                family_history: false,
            },
        };
        payload.recompute_bmi();
        payload
    }

    /// Set weight and height and derive the BMI from them.
    pub fn with_measurements(mut self, weight_kg: f64, height_cm: f64) -> Self {
        self.personal_data.weight_kg = weight_kg;
        self.personal_data.height_cm = height_cm;
        self.recompute_bmi();
        self
    }

    /// Keep `imc` consistent with `peso` and `altura`.
    ///
    /// An unusable pair leaves the previous value in place.
    pub fn recompute_bmi(&mut self) {
        if let Some(bmi) =
            health::body_mass_index(self.personal_data.weight_kg, self.personal_data.height_cm)
        {
            self.personal_data.bmi = bmi;
        }
    }

    /// Section-level sanity checks before submission.
    pub fn validate(&self) -> Result<(), String> {
        let days = [
            ("diasFrutasSemana", self.diet.fruit_days_per_week),
            ("diasVerdurasEmana", self.diet.vegetable_days_per_week),
            ("diasComidaRapidaSemana", self.diet.fast_food_days_per_week),
            ("diasEjercicioSemana", self.activity.exercise_days_per_week),
            (
                "diasControlGlucosaSemana",
                self.health_monitoring.glucose_checks_per_week,
            ),
            (
                "diasRevisionPiesSemana",
                self.health_monitoring.foot_checks_per_week,
            ),
        ];
        if let Some((field, value)) = days.iter().find(|(_, value)| *value > 7) {
            return Err(format!("{field} must be between 0 and 7, got {value}"));
        }
        if health::body_mass_index(self.personal_data.weight_kg, self.personal_data.height_cm)
            .is_none()
        {
            return Err("peso and altura must be positive".to_string());
        }
        Ok(())
    }
}
