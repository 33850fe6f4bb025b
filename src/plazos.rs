use crate::models::Festivos;
use chrono::{Datelike, Duration, NaiveDate};

/// Días hábiles que la autoridad tiene para responder una solicitud.
pub const PLAZO_RESPUESTA_DIAS: i64 = 40;
/// Días hábiles para solventar el primer y el segundo requerimiento.
pub const PLAZO_REQ1_DIAS: i64 = 20;
pub const PLAZO_REQ2_DIAS: i64 = 10;

fn es_habil(fecha: NaiveDate, festivos: &Festivos) -> bool {
    fecha.weekday().num_days_from_monday() < 5
        && !festivos.contains_key(&fecha.format("%Y-%m-%d").to_string())
}

/// Fecha límite de respuesta: avanza día por día desde la solicitud y cuenta
/// solo lunes a viernes no festivos hasta completar la ventana.
pub fn fecha_limite(solicitud: NaiveDate, festivos: &Festivos) -> NaiveDate {
    let mut fecha = solicitud;
    let mut contados = 0;
    while contados < PLAZO_RESPUESTA_DIAS {
        fecha += Duration::days(1);
        if es_habil(fecha, festivos) {
            contados += 1;
        }
    }
    fecha
}

/// Días hábiles en el rango `inicio..=fin`. Cero si el rango está invertido.
pub fn dias_habiles_entre(inicio: NaiveDate, fin: NaiveDate, festivos: &Festivos) -> i64 {
    let mut dias = 0;
    let mut actual = inicio;
    while actual <= fin {
        if es_habil(actual, festivos) {
            dias += 1;
        }
        actual += Duration::days(1);
    }
    dias
}

pub fn plazo_requerimiento(tipo: u8) -> i64 {
    if tipo == 1 { PLAZO_REQ1_DIAS } else { PLAZO_REQ2_DIAS }
}

/// Días hábiles que le quedan a la empresa para solventar un requerimiento
/// abierto; negativo cuando el plazo del requerimiento ya se agotó.
pub fn dias_para_solventar(
    tipo: u8,
    notificacion: NaiveDate,
    hoy: NaiveDate,
    festivos: &Festivos,
) -> i64 {
    plazo_requerimiento(tipo) - dias_habiles_entre(notificacion, hoy, festivos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fecha(valor: &str) -> NaiveDate {
        NaiveDate::parse_from_str(valor, "%Y-%m-%d").expect("fecha de prueba")
    }

    fn sin_festivos() -> Festivos {
        Festivos::new()
    }

    #[test]
    fn la_fecha_limite_salta_fines_de_semana() {
        // Lunes 2024-01-08; 40 días hábiles son exactamente 8 semanas.
        let limite = fecha_limite(fecha("2024-01-08"), &sin_festivos());
        assert_eq!(limite, fecha("2024-03-04"));
    }

    #[test]
    fn la_fecha_limite_salta_festivos() {
        let mut festivos = Festivos::new();
        festivos.insert("2024-01-09".to_string(), "festivo de prueba".to_string());
        let limite = fecha_limite(fecha("2024-01-08"), &festivos);
        assert_eq!(limite, fecha("2024-03-05"));
    }

    #[test]
    fn conteo_inclusivo_de_habiles() {
        // Lunes a viernes de la misma semana.
        assert_eq!(
            dias_habiles_entre(fecha("2024-01-08"), fecha("2024-01-12"), &sin_festivos()),
            5
        );
        // El fin de semana intermedio no cuenta.
        assert_eq!(
            dias_habiles_entre(fecha("2024-01-08"), fecha("2024-01-15"), &sin_festivos()),
            6
        );
        // Rango invertido.
        assert_eq!(
            dias_habiles_entre(fecha("2024-01-12"), fecha("2024-01-08"), &sin_festivos()),
            0
        );
    }

    #[test]
    fn solventar_descuenta_desde_la_notificacion() {
        // Notificado el lunes, consultado el mismo día: el día de la
        // notificación ya cuenta contra el plazo.
        let dias = dias_para_solventar(1, fecha("2024-01-08"), fecha("2024-01-08"), &sin_festivos());
        assert_eq!(dias, 19);

        let dias = dias_para_solventar(2, fecha("2024-01-08"), fecha("2024-01-19"), &sin_festivos());
        assert_eq!(dias, 0);
    }
}
