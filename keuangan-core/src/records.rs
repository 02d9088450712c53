use crate::error::KeuanganError;
use crate::format::{format_date, format_rupiah};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A row that can be drawn in one of the plain-text list tables.
pub trait TableRow {
    fn headers() -> &'static [&'static str];

    fn cells(&self) -> Vec<String>;

    /// Column indexes holding amounts; these are right-aligned.
    fn amount_columns() -> &'static [usize] {
        &[]
    }

    /// Amount counted towards the list total, if the row carries one.
    fn amount(&self) -> Option<i64> {
        None
    }
}

/// Chart-of-accounts entry (daftar akun)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Akun {
    pub id: u64,
    pub kode_akun: String,
    pub nama_akun: String,
    #[serde(default)]
    pub jenis: String,
}

/// Revenue entry (pendapatan)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pendapatan {
    pub id: u64,
    #[serde(with = "iso_date")]
    pub tanggal: Date,
    pub kode_akun: String,
    pub uraian: String,
    pub jumlah: i64,
}

/// Bank account (rekening)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rekening {
    pub id: u64,
    pub nama_bank: String,
    pub nomor_rekening: String,
    pub atas_nama: String,
    #[serde(default)]
    pub saldo: i64,
}

impl TableRow for Akun {
    fn headers() -> &'static [&'static str] {
        &["Kode", "Nama Akun", "Jenis"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.kode_akun.clone(),
            self.nama_akun.clone(),
            self.jenis.clone(),
        ]
    }
}

impl TableRow for Pendapatan {
    fn headers() -> &'static [&'static str] {
        &["Tanggal", "Kode Akun", "Uraian", "Jumlah"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            format_date(self.tanggal),
            self.kode_akun.clone(),
            self.uraian.clone(),
            format_rupiah(self.jumlah),
        ]
    }

    fn amount_columns() -> &'static [usize] {
        &[3]
    }

    fn amount(&self) -> Option<i64> {
        Some(self.jumlah)
    }
}

impl TableRow for Rekening {
    fn headers() -> &'static [&'static str] {
        &["Bank", "No. Rekening", "Atas Nama", "Saldo"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.nama_bank.clone(),
            self.nomor_rekening.clone(),
            self.atas_nama.clone(),
            format_rupiah(self.saldo),
        ]
    }

    fn amount_columns() -> &'static [usize] {
        &[3]
    }

    fn amount(&self) -> Option<i64> {
        Some(self.saldo)
    }
}

/// Which list a record file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Akun,
    Pendapatan,
    Rekening,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [
        RecordKind::Akun,
        RecordKind::Pendapatan,
        RecordKind::Rekening,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Akun => "akun",
            RecordKind::Pendapatan => "pendapatan",
            RecordKind::Rekening => "rekening",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = KeuanganError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        RecordKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| KeuanganError::Config(format!("Unknown record kind '{}'", s.trim())))
    }
}

/// Parse a JSON array of rows as exported from the backend table.
pub fn parse_records<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, KeuanganError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, KeuanganError> {
    let content = fs::read_to_string(path)?;
    let rows = parse_records(&content)?;
    log::debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Sum of row amounts, saturating instead of overflowing.
pub fn total_amount<T: TableRow>(rows: &[T]) -> i64 {
    rows.iter()
        .filter_map(TableRow::amount)
        .fold(0i64, |acc, amount| acc.saturating_add(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const PENDAPATAN_JSON: &str = r#"[
        {"id": 1, "tanggal": "2026-10-01", "kode_akun": "4.1.01",
         "uraian": "Rawat jalan", "jumlah": 1500000},
        {"id": 2, "tanggal": "2026-10-02", "kode_akun": "4.1.02",
         "uraian": "Rawat inap", "jumlah": 2750000}
    ]"#;

    #[test]
    fn test_parse_pendapatan_rows() {
        let rows: Vec<Pendapatan> = parse_records(PENDAPATAN_JSON).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tanggal, date!(2026 - 10 - 01));
        assert_eq!(
            rows[1].cells(),
            vec!["2 Oktober 2026", "4.1.02", "Rawat inap", "Rp 2.750.000"]
        );
        assert_eq!(total_amount(&rows), 4250000);
    }

    #[test]
    fn test_pendapatan_date_written_as_iso() {
        let rows: Vec<Pendapatan> = parse_records(PENDAPATAN_JSON).unwrap();
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["tanggal"], "2026-10-01");
    }

    #[test]
    fn test_optional_fields_default() {
        let akun: Vec<Akun> =
            parse_records(r#"[{"id": 7, "kode_akun": "1.1", "nama_akun": "Kas"}]"#).unwrap();
        assert_eq!(akun[0].jenis, "");
        assert_eq!(total_amount(&akun), 0);

        let rekening: Vec<Rekening> = parse_records(
            r#"[{"id": 1, "nama_bank": "BRI", "nomor_rekening": "0012-01",
                 "atas_nama": "RSB Ambon"}]"#,
        )
        .unwrap();
        assert_eq!(rekening[0].saldo, 0);
        assert_eq!(rekening[0].cells()[3], "Rp 0");
    }

    #[test]
    fn test_bad_rows_are_errors() {
        let bad_date = r#"[{"id": 1, "tanggal": "01/10/2026", "kode_akun": "x",
                            "uraian": "y", "jumlah": 1}]"#;
        assert!(matches!(
            parse_records::<Pendapatan>(bad_date),
            Err(KeuanganError::Json(_))
        ));
        assert!(parse_records::<Akun>("{}").is_err());
    }

    #[test]
    fn test_total_saturates() {
        let rows = vec![
            Rekening {
                id: 1,
                nama_bank: "A".into(),
                nomor_rekening: "1".into(),
                atas_nama: "x".into(),
                saldo: i64::MAX,
            },
            Rekening {
                id: 2,
                nama_bank: "B".into(),
                nomor_rekening: "2".into(),
                atas_nama: "y".into(),
                saldo: 10,
            },
        ];
        assert_eq!(total_amount(&rows), i64::MAX);
    }

    #[test]
    fn test_record_kind_parsing() {
        assert_eq!("Pendapatan".parse::<RecordKind>().unwrap(), RecordKind::Pendapatan);
        assert_eq!(" akun ".parse::<RecordKind>().unwrap(), RecordKind::Akun);
        assert!("jurnal".parse::<RecordKind>().is_err());
        assert_eq!(RecordKind::Rekening.to_string(), "rekening");
    }

    #[test]
    fn test_load_records_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pendapatan.json");
        fs::write(&path, PENDAPATAN_JSON).unwrap();
        let rows: Vec<Pendapatan> = load_records(&path).unwrap();
        assert_eq!(rows.len(), 2);

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            load_records::<Pendapatan>(&missing),
            Err(KeuanganError::Io(_))
        ));
    }
}
