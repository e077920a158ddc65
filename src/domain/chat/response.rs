//! Templated response synthesis.
//!
//! One deterministic template per intent, rendered as a pure function of
//! the [`ResponseContext`]. Every template is total: for any well-formed
//! context it returns a non-empty string and never fails.

use crate::domain::foundation::Timestamp;

use super::intent::Intent;

/// Values available to a response template for one turn.
#[derive(Debug, Clone)]
pub struct ResponseContext {
    /// Report number issued for this turn.
    pub report_number: u32,
    /// Time the reply is rendered.
    pub now: Timestamp,
    /// Original (trimmed) user text.
    pub raw_text: String,
}

impl ResponseContext {
    pub fn new(report_number: u32, now: Timestamp, raw_text: impl Into<String>) -> Self {
        Self {
            report_number,
            now,
            raw_text: raw_text.into(),
        }
    }
}

/// Extracts the token following the last `#` in the text.
///
/// Used by the status-check template. Returns an empty string when nothing
/// follows the `#`; the classifier guarantees a `#` is present for this
/// intent, but malformed input must degrade rather than fail.
pub fn extract_status_token(text: &str) -> &str {
    match text.rfind('#') {
        Some(pos) => {
            let rest = text[pos + 1..].trim_start();
            rest.split_whitespace().next().unwrap_or("")
        }
        None => "",
    }
}

/// Renders the response template for the classified intent.
pub fn render(intent: Intent, ctx: &ResponseContext) -> String {
    match intent {
        Intent::WeatherInfo => render_weather_info(ctx),
        Intent::EvacuationInfo => render_evacuation_info(),
        Intent::HighWaveReport => render_high_wave_report(ctx),
        Intent::VictimReport => render_victim_report(ctx),
        Intent::StatusCheck => render_status_check(ctx),
        Intent::Default => render_default(ctx),
    }
}

// The weather reply is informational boilerplate; the live feed is served
// by the forecast collaborator, not the chat core.
fn render_weather_info(ctx: &ResponseContext) -> String {
    format!(
        "Info Cuaca Terkini (Update otomatis dari BMKG):\n\n\
         - Tinggi Gelombang: 2.5 - 4.0 meter\n\
         - Kecepatan Angin: 20-25 knot\n\
         - Status: WASPADA\n\
         - Area: Perairan Cilacap - Parangtritis\n\n\
         Diperbarui: {}\n\
         Sumber: BMKG",
        ctx.now.display()
    )
}

fn render_evacuation_info() -> String {
    "Lokasi Pengungsian Terdekat:\n\n\
     1. Gedung BPBD Cilacap\n   Kapasitas: 200 orang\n   Status: Tersedia\n\n\
     2. Balai Desa Parangtritis\n   Kapasitas: 150 orang\n   Status: Tersedia\n\n\
     3. Sekolah SMP 1 Pangandaran\n   Kapasitas: 300 orang\n   Status: Tersedia\n\n\
     Hubungi 115 untuk bantuan evakuasi"
        .to_string()
}

fn render_high_wave_report(ctx: &ResponseContext) -> String {
    format!(
        "Laporan Gelombang Tinggi #{num}\n\n\
         Waktu Laporan: {now}\n\
         Lokasi: [Mohon sebutkan lokasi spesifik]\n\n\
         Tindakan yang diambil:\n\
         1. Laporan diteruskan ke BPBD\n\
         2. Tim pemantau disiagakan\n\
         3. Peringatan disebarkan ke wilayah sekitar\n\n\
         Mohon update situasi setiap 30 menit. \
         Untuk cek status laporan, ketik \"status #{num}\"",
        num = ctx.report_number,
        now = ctx.now.display()
    )
}

fn render_victim_report(ctx: &ResponseContext) -> String {
    format!(
        "LAPORAN DARURAT #{}\n\n\
         SEGERA HUBUNGI:\n\
         - BASARNAS: 115\n\
         - SAR: 129\n\n\
         Detail yang diperlukan:\n\
         - Jumlah korban\n\
         - Lokasi terakhir terlihat\n\
         - Ciri-ciri korban\n\
         - Waktu kejadian\n\n\
         Status: Tim SAR dikerahkan\n\
         Prioritas: URGENT",
        ctx.report_number
    )
}

fn render_status_check(ctx: &ResponseContext) -> String {
    format!(
        "Status Laporan #{}\n\n\
         - Laporan diterima\n\
         - Tim pemantau telah dikerahkan\n\
         - Koordinasi dengan BPBD sedang berlangsung\n\
         - Update terakhir: {}\n\n\
         Untuk informasi lebih lanjut, hubungi posko terdekat.",
        extract_status_token(&ctx.raw_text),
        ctx.now.display()
    )
}

fn render_default(ctx: &ResponseContext) -> String {
    format!(
        "Laporan #{} diterima.\n\n\
         Mohon sertakan informasi berikut:\n\
         1. Lokasi spesifik\n\
         2. Kondisi terkini\n\
         3. Jumlah orang terdampak (jika ada)\n\
         4. Kerusakan yang terlihat\n\n\
         Nomor Darurat:\n\
         - BASARNAS: 115\n\
         - SAR: 129\n\
         - BMKG: 196",
        ctx.report_number
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(text: &str) -> ResponseContext {
        ResponseContext::new(2_024_005, Timestamp::now(), text)
    }

    mod token_extraction {
        use super::*;

        #[test]
        fn extracts_token_after_hash() {
            assert_eq!(extract_status_token("status #2024005"), "2024005");
        }

        #[test]
        fn uses_last_hash_when_multiple_present() {
            assert_eq!(extract_status_token("status #1 lalu #2024007"), "2024007");
        }

        #[test]
        fn stops_at_whitespace() {
            assert_eq!(extract_status_token("status #2024005 mohon info"), "2024005");
        }

        #[test]
        fn empty_when_nothing_follows_hash() {
            assert_eq!(extract_status_token("status #"), "");
            assert_eq!(extract_status_token("status #   "), "");
        }

        #[test]
        fn empty_when_no_hash_present() {
            assert_eq!(extract_status_token("status laporan"), "");
        }
    }

    mod templates {
        use super::*;

        #[test]
        fn weather_info_includes_timestamp() {
            let ctx = ctx("info cuaca");
            let out = render(Intent::WeatherInfo, &ctx);
            assert!(out.contains("Info Cuaca Terkini"));
            assert!(out.contains(&ctx.now.display()));
        }

        #[test]
        fn evacuation_info_lists_shelters_and_number() {
            let out = render(Intent::EvacuationInfo, &ctx("pengungsian"));
            assert!(out.contains("Gedung BPBD Cilacap"));
            assert!(out.contains("Hubungi 115"));
        }

        #[test]
        fn high_wave_report_echoes_report_number_twice() {
            let out = render(Intent::HighWaveReport, &ctx("gelombang tinggi"));
            assert!(out.contains("Laporan Gelombang Tinggi #2024005"));
            assert!(out.contains("ketik \"status #2024005\""));
        }

        #[test]
        fn victim_report_includes_emergency_numbers() {
            let out = render(Intent::VictimReport, &ctx("ada korban"));
            assert!(out.contains("LAPORAN DARURAT #2024005"));
            assert!(out.contains("BASARNAS: 115"));
            assert!(out.contains("SAR: 129"));
            assert!(out.contains("URGENT"));
        }

        #[test]
        fn status_check_echoes_extracted_token() {
            let out = render(Intent::StatusCheck, &ctx("status #2024005"));
            assert!(out.contains("Status Laporan #2024005"));
        }

        #[test]
        fn status_check_with_missing_token_renders_empty_placeholder() {
            let out = render(Intent::StatusCheck, &ctx("status #"));
            assert!(out.starts_with("Status Laporan #\n"));
        }

        #[test]
        fn default_includes_report_number_and_checklist() {
            let out = render(Intent::Default, &ctx("halo"));
            assert!(out.contains("Laporan #2024005 diterima"));
            assert!(out.contains("BMKG: 196"));
        }

        #[test]
        fn all_templates_are_total_and_non_empty() {
            for intent in [
                Intent::WeatherInfo,
                Intent::EvacuationInfo,
                Intent::HighWaveReport,
                Intent::VictimReport,
                Intent::StatusCheck,
                Intent::Default,
            ] {
                let out = render(intent, &ctx(""));
                assert!(!out.is_empty(), "{:?} rendered empty", intent);
            }
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        const ALL_INTENTS: [Intent; 6] = [
            Intent::WeatherInfo,
            Intent::EvacuationInfo,
            Intent::HighWaveReport,
            Intent::VictimReport,
            Intent::StatusCheck,
            Intent::Default,
        ];

        proptest! {
            #[test]
            fn token_extraction_never_panics(text in ".{0,200}") {
                let token = extract_status_token(&text);
                prop_assert!(!token.contains(char::is_whitespace));
            }

            #[test]
            fn every_template_is_total(
                text in ".{0,200}",
                report_number in 0u32..u32::MAX,
                intent_idx in 0usize..6,
            ) {
                let ctx = ResponseContext::new(report_number, Timestamp::now(), text);
                let out = render(ALL_INTENTS[intent_idx], &ctx);
                prop_assert!(!out.is_empty());
            }
        }
    }
}
