use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient::{self, number_from_value};

/// Per-farm thresholds and targets edited by the admin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmConfig {
    pub suhu_normal_min: f64,
    pub suhu_normal_max: f64,
    pub suhu_kritis_rendah: f64,
    pub suhu_kritis_tinggi: f64,
    pub kelembapan_normal_min: f64,
    pub kelembapan_normal_max: f64,
    pub kelembapan_kritis_rendah: f64,
    pub kelembapan_kritis_tinggi: f64,
    pub amonia_max: f64,
    pub amonia_kritis: f64,
    pub bobot_pertumbuhan_min: f64,
    pub bobot_target: f64,
    pub pakan_min: f64,
    pub minum_min: f64,
    pub populasi_awal: f64,
    pub bobot_awal: f64,
    pub luas_kandang: f64,
    pub peternak_id: Option<i64>,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            suhu_normal_min: 28.0,
            suhu_normal_max: 32.0,
            suhu_kritis_rendah: 25.0,
            suhu_kritis_tinggi: 35.0,
            kelembapan_normal_min: 60.0,
            kelembapan_normal_max: 70.0,
            kelembapan_kritis_rendah: 50.0,
            kelembapan_kritis_tinggi: 80.0,
            amonia_max: 20.0,
            amonia_kritis: 30.0,
            bobot_pertumbuhan_min: 100.0,
            bobot_target: 2000.0,
            pakan_min: 50.0,
            minum_min: 100.0,
            populasi_awal: 1000.0,
            bobot_awal: 40.0,
            luas_kandang: 100.0,
            peternak_id: Some(2),
        }
    }
}

impl FarmConfig {
    pub fn get(&self, field: ConfigField) -> f64 {
        *self.slot(field)
    }

    pub fn set(&mut self, field: ConfigField, value: f64) {
        *self.slot_mut(field) = value;
    }

    /// Overlay the fields present in an API payload, keeping ours for the rest
    pub fn merged_with(&self, payload: &Map<String, Value>) -> Self {
        let mut merged = self.clone();
        for field in ConfigField::ALL {
            if let Some(value) = payload.get(field.key()).and_then(number_from_value) {
                merged.set(field, value);
            }
        }
        if let Some(id) = payload.get("peternak_id").and_then(Value::as_i64) {
            merged.peternak_id = Some(id);
        }
        merged
    }

    fn slot(&self, field: ConfigField) -> &f64 {
        match field {
            ConfigField::SuhuNormalMin => &self.suhu_normal_min,
            ConfigField::SuhuNormalMax => &self.suhu_normal_max,
            ConfigField::SuhuKritisRendah => &self.suhu_kritis_rendah,
            ConfigField::SuhuKritisTinggi => &self.suhu_kritis_tinggi,
            ConfigField::KelembapanNormalMin => &self.kelembapan_normal_min,
            ConfigField::KelembapanNormalMax => &self.kelembapan_normal_max,
            ConfigField::KelembapanKritisRendah => &self.kelembapan_kritis_rendah,
            ConfigField::KelembapanKritisTinggi => &self.kelembapan_kritis_tinggi,
            ConfigField::AmoniaMax => &self.amonia_max,
            ConfigField::AmoniaKritis => &self.amonia_kritis,
            ConfigField::BobotPertumbuhanMin => &self.bobot_pertumbuhan_min,
            ConfigField::BobotTarget => &self.bobot_target,
            ConfigField::PakanMin => &self.pakan_min,
            ConfigField::MinumMin => &self.minum_min,
            ConfigField::PopulasiAwal => &self.populasi_awal,
            ConfigField::BobotAwal => &self.bobot_awal,
            ConfigField::LuasKandang => &self.luas_kandang,
        }
    }

    fn slot_mut(&mut self, field: ConfigField) -> &mut f64 {
        match field {
            ConfigField::SuhuNormalMin => &mut self.suhu_normal_min,
            ConfigField::SuhuNormalMax => &mut self.suhu_normal_max,
            ConfigField::SuhuKritisRendah => &mut self.suhu_kritis_rendah,
            ConfigField::SuhuKritisTinggi => &mut self.suhu_kritis_tinggi,
            ConfigField::KelembapanNormalMin => &mut self.kelembapan_normal_min,
            ConfigField::KelembapanNormalMax => &mut self.kelembapan_normal_max,
            ConfigField::KelembapanKritisRendah => &mut self.kelembapan_kritis_rendah,
            ConfigField::KelembapanKritisTinggi => &mut self.kelembapan_kritis_tinggi,
            ConfigField::AmoniaMax => &mut self.amonia_max,
            ConfigField::AmoniaKritis => &mut self.amonia_kritis,
            ConfigField::BobotPertumbuhanMin => &mut self.bobot_pertumbuhan_min,
            ConfigField::BobotTarget => &mut self.bobot_target,
            ConfigField::PakanMin => &mut self.pakan_min,
            ConfigField::MinumMin => &mut self.minum_min,
            ConfigField::PopulasiAwal => &mut self.populasi_awal,
            ConfigField::BobotAwal => &mut self.bobot_awal,
            ConfigField::LuasKandang => &mut self.luas_kandang,
        }
    }
}

/// Numeric fields of [`FarmConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    SuhuNormalMin,
    SuhuNormalMax,
    SuhuKritisRendah,
    SuhuKritisTinggi,
    KelembapanNormalMin,
    KelembapanNormalMax,
    KelembapanKritisRendah,
    KelembapanKritisTinggi,
    AmoniaMax,
    AmoniaKritis,
    BobotPertumbuhanMin,
    BobotTarget,
    PakanMin,
    MinumMin,
    PopulasiAwal,
    BobotAwal,
    LuasKandang,
}

impl ConfigField {
    pub const ALL: [ConfigField; 17] = [
        ConfigField::SuhuNormalMin,
        ConfigField::SuhuNormalMax,
        ConfigField::SuhuKritisRendah,
        ConfigField::SuhuKritisTinggi,
        ConfigField::KelembapanNormalMin,
        ConfigField::KelembapanNormalMax,
        ConfigField::KelembapanKritisRendah,
        ConfigField::KelembapanKritisTinggi,
        ConfigField::AmoniaMax,
        ConfigField::AmoniaKritis,
        ConfigField::BobotPertumbuhanMin,
        ConfigField::BobotTarget,
        ConfigField::PakanMin,
        ConfigField::MinumMin,
        ConfigField::PopulasiAwal,
        ConfigField::BobotAwal,
        ConfigField::LuasKandang,
    ];

    /// Backend field name
    pub fn key(&self) -> &'static str {
        match self {
            Self::SuhuNormalMin => "suhu_normal_min",
            Self::SuhuNormalMax => "suhu_normal_max",
            Self::SuhuKritisRendah => "suhu_kritis_rendah",
            Self::SuhuKritisTinggi => "suhu_kritis_tinggi",
            Self::KelembapanNormalMin => "kelembapan_normal_min",
            Self::KelembapanNormalMax => "kelembapan_normal_max",
            Self::KelembapanKritisRendah => "kelembapan_kritis_rendah",
            Self::KelembapanKritisTinggi => "kelembapan_kritis_tinggi",
            Self::AmoniaMax => "amonia_max",
            Self::AmoniaKritis => "amonia_kritis",
            Self::BobotPertumbuhanMin => "bobot_pertumbuhan_min",
            Self::BobotTarget => "bobot_target",
            Self::PakanMin => "pakan_min",
            Self::MinumMin => "minum_min",
            Self::PopulasiAwal => "populasi_awal",
            Self::BobotAwal => "bobot_awal",
            Self::LuasKandang => "luas_kandang",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SuhuNormalMin => "Min Normal (°C)",
            Self::SuhuNormalMax => "Max Normal (°C)",
            Self::SuhuKritisRendah => "Min Kritis (°C)",
            Self::SuhuKritisTinggi => "Max Kritis (°C)",
            Self::KelembapanNormalMin => "Min Normal (%)",
            Self::KelembapanNormalMax => "Max Normal (%)",
            Self::KelembapanKritisRendah => "Min Kritis (%)",
            Self::KelembapanKritisTinggi => "Max Kritis (%)",
            Self::AmoniaMax => "Max Normal (ppm)",
            Self::AmoniaKritis => "Kritis (ppm)",
            Self::BobotPertumbuhanMin => "Min/Minggu (g)",
            Self::BobotTarget => "Target Panen (g)",
            Self::PakanMin => "Min Normal (gram)",
            Self::MinumMin => "Min Normal (liter)",
            Self::PopulasiAwal => "Jumlah (ekor)",
            Self::BobotAwal => "Bobot (gram)",
            Self::LuasKandang => "Luas (m²)",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::SuhuNormalMin
            | Self::SuhuNormalMax
            | Self::SuhuKritisRendah
            | Self::SuhuKritisTinggi => "°C",
            Self::KelembapanNormalMin
            | Self::KelembapanNormalMax
            | Self::KelembapanKritisRendah
            | Self::KelembapanKritisTinggi => "%",
            Self::AmoniaMax | Self::AmoniaKritis => "ppm",
            Self::BobotPertumbuhanMin | Self::BobotTarget | Self::PakanMin | Self::BobotAwal => "g",
            Self::MinumMin => "L",
            Self::PopulasiAwal => "ekor",
            Self::LuasKandang => "m²",
        }
    }
}

/// Cards of the configuration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSection {
    pub title: &'static str,
    pub fields: &'static [ConfigField],
}

pub const CONFIG_SECTIONS: [ConfigSection; 9] = [
    ConfigSection {
        title: "Pengaturan Suhu",
        fields: &[
            ConfigField::SuhuNormalMin,
            ConfigField::SuhuNormalMax,
            ConfigField::SuhuKritisRendah,
            ConfigField::SuhuKritisTinggi,
        ],
    },
    ConfigSection {
        title: "Pengaturan Kelembapan",
        fields: &[
            ConfigField::KelembapanNormalMin,
            ConfigField::KelembapanNormalMax,
            ConfigField::KelembapanKritisRendah,
            ConfigField::KelembapanKritisTinggi,
        ],
    },
    ConfigSection {
        title: "Pengaturan Kadar Amonia",
        fields: &[ConfigField::AmoniaMax, ConfigField::AmoniaKritis],
    },
    ConfigSection {
        title: "Pengaturan Bobot",
        fields: &[ConfigField::BobotPertumbuhanMin, ConfigField::BobotTarget],
    },
    ConfigSection {
        title: "Pengaturan Pakan",
        fields: &[ConfigField::PakanMin],
    },
    ConfigSection {
        title: "Pengaturan Minum",
        fields: &[ConfigField::MinumMin],
    },
    ConfigSection {
        title: "Populasi Awal",
        fields: &[ConfigField::PopulasiAwal],
    },
    ConfigSection {
        title: "Bobot Rata-rata Awal",
        fields: &[ConfigField::BobotAwal],
    },
    ConfigSection {
        title: "Luas Kandang",
        fields: &[ConfigField::LuasKandang],
    },
];

/// Config payloads arrive as `{config: {...}}` or as the bare object
pub fn config_payload(value: &Value) -> Option<&Map<String, Value>> {
    let object = value.as_object()?;
    match object.get("config") {
        Some(Value::Object(inner)) => Some(inner),
        _ => Some(object),
    }
}

/// Farm worker assigned under an owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmWorker {
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl FarmWorker {
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Result of an IoT CSV import
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CsvImportReport {
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub inserted: Option<f64>,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total_rows: Option<f64>,
}

impl CsvImportReport {
    pub const ERROR_PREVIEW: usize = 5;

    /// First few row errors plus how many were left out
    pub fn error_preview(&self) -> (&[String], usize) {
        let shown = self.errors.len().min(Self::ERROR_PREVIEW);
        (&self.errors[..shown], self.errors.len() - shown)
    }
}
