use crate::models::Devolucion;
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Ventana fija de respuesta de la autoridad, en días, usada para el avance del plazo.
pub const PLAZO_TOTAL_DIAS: i64 = 40;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatusError {
    #[error("fecha inválida: {0:?}")]
    InvalidDate(String),
    #[error("secuencia de fechas inválida: {0}")]
    InvalidSequence(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Estado {
    Activo,
    PausadoReq1,
    PausadoReq2,
    Vencido,
}

impl Estado {
    pub fn as_str(self) -> &'static str {
        match self {
            Estado::Activo => "activo",
            Estado::PausadoReq1 => "pausado_req1",
            Estado::PausadoReq2 => "pausado_req2",
            Estado::Vencido => "vencido",
        }
    }
}

/// Corte de presentación sobre `porcentaje_plazo`; no participa en las transiciones de estado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NivelPlazo {
    Nominal,
    Advertencia,
    Critico,
}

/// Campos derivados de una devolución para un día dado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resumen {
    pub dias_transcurridos: i64,
    pub dias_restantes: i64,
    pub estado: Estado,
    pub porcentaje_plazo: u8,
}

pub fn parse_fecha(valor: &str) -> Result<NaiveDate, StatusError> {
    NaiveDate::parse_from_str(valor, "%Y-%m-%d")
        .map_err(|_| StatusError::InvalidDate(valor.to_string()))
}

fn parse_opcional(valor: Option<&str>) -> Result<Option<NaiveDate>, StatusError> {
    valor.map(parse_fecha).transpose()
}

fn secuencia(detalle: &str) -> StatusError {
    StatusError::InvalidSequence(detalle.to_string())
}

/// Requerimiento notificado y aún sin solventar: `(tipo, fecha_notificacion)`.
/// Un primer requerimiento abierto tiene prioridad sobre el segundo.
pub fn pausa_abierta(devolucion: &Devolucion) -> Option<(u8, &str)> {
    if devolucion.req1_respuesta.is_none() {
        if let Some(notif) = devolucion.req1_notificacion.as_deref() {
            return Some((1, notif));
        }
    }
    if devolucion.req2_respuesta.is_none() {
        if let Some(notif) = devolucion.req2_notificacion.as_deref() {
            return Some((2, notif));
        }
    }
    None
}

/// Rechaza combinaciones de fechas que el registro nunca debió aceptar:
/// respuestas sin notificación, un segundo requerimiento antes del primero,
/// o cualquier fecha de requerimiento anterior a la solicitud.
pub fn validar_secuencia(devolucion: &Devolucion) -> Result<(), StatusError> {
    let solicitud = parse_fecha(&devolucion.fecha_solicitud)?;
    let limite = parse_fecha(&devolucion.fecha_limite)?;
    if limite < solicitud {
        return Err(secuencia("fecha_limite anterior a fecha_solicitud"));
    }

    let req1_notif = parse_opcional(devolucion.req1_notificacion.as_deref())?;
    let req1_resp = parse_opcional(devolucion.req1_respuesta.as_deref())?;
    let req2_notif = parse_opcional(devolucion.req2_notificacion.as_deref())?;
    let req2_resp = parse_opcional(devolucion.req2_respuesta.as_deref())?;

    if req1_resp.is_some() && req1_notif.is_none() {
        return Err(secuencia("req1_respuesta sin req1_notificacion"));
    }
    if req2_resp.is_some() && req2_notif.is_none() {
        return Err(secuencia("req2_respuesta sin req2_notificacion"));
    }
    if req2_notif.is_some() && req1_notif.is_none() {
        return Err(secuencia("req2_notificacion sin req1_notificacion"));
    }

    if let Some(notif) = req1_notif {
        if notif < solicitud {
            return Err(secuencia("req1_notificacion anterior a fecha_solicitud"));
        }
        if let Some(resp) = req1_resp {
            if resp < notif {
                return Err(secuencia("req1_respuesta anterior a su notificación"));
            }
        }
    }
    if let Some(notif2) = req2_notif {
        if notif2 < solicitud {
            return Err(secuencia("req2_notificacion anterior a fecha_solicitud"));
        }
        if let Some(notif1) = req1_notif {
            if notif2 < notif1 {
                return Err(secuencia("req2_notificacion anterior a req1_notificacion"));
            }
        }
        if let Some(resp2) = req2_resp {
            if resp2 < notif2 {
                return Err(secuencia("req2_respuesta anterior a su notificación"));
            }
            if let Some(resp1) = req1_resp {
                if resp2 < resp1 {
                    return Err(secuencia("req2_respuesta anterior a req1_respuesta"));
                }
            }
        }
    }

    Ok(())
}

/// Deriva días transcurridos, días restantes, estado y avance del plazo.
///
/// La fecha límite nunca se mueve: una pausa solo suprime la transición a
/// `vencido` mientras haya un requerimiento sin solventar, aunque
/// `dias_restantes` siga bajando (y pueda ser negativo).
pub fn compute_status(devolucion: &Devolucion, hoy: NaiveDate) -> Result<Resumen, StatusError> {
    validar_secuencia(devolucion)?;

    let solicitud = parse_fecha(&devolucion.fecha_solicitud)?;
    let limite = parse_fecha(&devolucion.fecha_limite)?;

    let dias_transcurridos = (hoy - solicitud).num_days().max(0);
    let dias_restantes = (limite - hoy).num_days();

    let estado = match pausa_abierta(devolucion) {
        Some((1, _)) => Estado::PausadoReq1,
        Some(_) => Estado::PausadoReq2,
        None if dias_restantes < 0 => Estado::Vencido,
        None => Estado::Activo,
    };

    Ok(Resumen {
        dias_transcurridos,
        dias_restantes,
        estado,
        porcentaje_plazo: porcentaje_plazo(dias_transcurridos),
    })
}

pub fn porcentaje_plazo(dias_transcurridos: i64) -> u8 {
    let fraccion = (dias_transcurridos as f64 / PLAZO_TOTAL_DIAS as f64).clamp(0.0, 1.0);
    (fraccion * 100.0).round() as u8
}

pub fn nivel_plazo(porcentaje: u8) -> NivelPlazo {
    if porcentaje < 75 {
        NivelPlazo::Nominal
    } else if porcentaje < 100 {
        NivelPlazo::Advertencia
    } else {
        NivelPlazo::Critico
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fecha(valor: &str) -> NaiveDate {
        parse_fecha(valor).expect("fecha de prueba")
    }

    fn base() -> Devolucion {
        Devolucion {
            id: 1,
            empresa_id: 1,
            monto: 1500.0,
            fecha_solicitud: "2024-01-01".to_string(),
            fecha_periodo: "2023-12".to_string(),
            fecha_limite: "2024-02-10".to_string(),
            req1_notificacion: None,
            req1_respuesta: None,
            req2_notificacion: None,
            req2_respuesta: None,
        }
    }

    #[test]
    fn mitad_del_plazo() {
        let resumen = compute_status(&base(), fecha("2024-01-21")).expect("resumen");
        assert_eq!(resumen.dias_transcurridos, 20);
        assert_eq!(resumen.dias_restantes, 20);
        assert_eq!(resumen.porcentaje_plazo, 50);
        assert_eq!(resumen.estado, Estado::Activo);
    }

    #[test]
    fn transcurridos_mas_restantes_cubren_la_ventana() {
        for dia in ["2024-01-01", "2024-01-15", "2024-02-10"] {
            let resumen = compute_status(&base(), fecha(dia)).expect("resumen");
            assert_eq!(resumen.dias_transcurridos + resumen.dias_restantes, 40);
        }
    }

    #[test]
    fn transcurridos_nunca_negativos() {
        let resumen = compute_status(&base(), fecha("2023-12-15")).expect("resumen");
        assert_eq!(resumen.dias_transcurridos, 0);
        assert_eq!(resumen.porcentaje_plazo, 0);
    }

    #[test]
    fn porcentaje_acotado_a_cien() {
        let resumen = compute_status(&base(), fecha("2031-06-01")).expect("resumen");
        assert_eq!(resumen.porcentaje_plazo, 100);
        assert_eq!(porcentaje_plazo(i64::MAX / 2), 100);
        assert_eq!(porcentaje_plazo(-3), 0);
    }

    #[test]
    fn vencido_al_rebasar_la_fecha_limite() {
        let resumen = compute_status(&base(), fecha("2024-02-11")).expect("resumen");
        assert_eq!(resumen.estado, Estado::Vencido);
        assert!(resumen.dias_restantes < 0);
    }

    #[test]
    fn requerimiento_abierto_pausa_aunque_el_plazo_este_rebasado() {
        let mut devolucion = base();
        devolucion.req1_notificacion = Some("2024-01-10".to_string());
        let resumen = compute_status(&devolucion, fecha("2024-03-01")).expect("resumen");
        assert!(resumen.dias_restantes < 0);
        assert_eq!(resumen.estado, Estado::PausadoReq1);
    }

    #[test]
    fn solventar_el_primero_reactiva_o_cede_al_segundo() {
        let mut devolucion = base();
        devolucion.req1_notificacion = Some("2024-01-10".to_string());
        devolucion.req1_respuesta = Some("2024-01-15".to_string());
        let resumen = compute_status(&devolucion, fecha("2024-01-20")).expect("resumen");
        assert_eq!(resumen.estado, Estado::Activo);

        devolucion.req2_notificacion = Some("2024-01-18".to_string());
        let resumen = compute_status(&devolucion, fecha("2024-01-20")).expect("resumen");
        assert_eq!(resumen.estado, Estado::PausadoReq2);
    }

    #[test]
    fn fecha_malformada_se_rechaza() {
        let mut devolucion = base();
        devolucion.fecha_solicitud = "01/01/2024".to_string();
        assert_eq!(
            compute_status(&devolucion, fecha("2024-01-21")),
            Err(StatusError::InvalidDate("01/01/2024".to_string()))
        );
    }

    #[test]
    fn respuesta_sin_notificacion_se_rechaza() {
        let mut devolucion = base();
        devolucion.req1_respuesta = Some("2024-01-15".to_string());
        assert!(matches!(
            validar_secuencia(&devolucion),
            Err(StatusError::InvalidSequence(_))
        ));
    }

    #[test]
    fn segundo_requerimiento_antes_del_primero_se_rechaza() {
        let mut devolucion = base();
        devolucion.req1_notificacion = Some("2024-01-20".to_string());
        devolucion.req1_respuesta = Some("2024-01-25".to_string());
        devolucion.req2_notificacion = Some("2024-01-10".to_string());
        assert!(matches!(
            validar_secuencia(&devolucion),
            Err(StatusError::InvalidSequence(_))
        ));
    }

    #[test]
    fn requerimiento_anterior_a_la_solicitud_se_rechaza() {
        let mut devolucion = base();
        devolucion.req1_notificacion = Some("2023-12-20".to_string());
        assert!(matches!(
            validar_secuencia(&devolucion),
            Err(StatusError::InvalidSequence(_))
        ));
    }

    #[test]
    fn respuesta_anterior_a_su_notificacion_se_rechaza() {
        let mut devolucion = base();
        devolucion.req1_notificacion = Some("2024-01-10".to_string());
        devolucion.req1_respuesta = Some("2024-01-08".to_string());
        assert!(matches!(
            validar_secuencia(&devolucion),
            Err(StatusError::InvalidSequence(_))
        ));
    }

    #[test]
    fn niveles_de_plazo() {
        assert_eq!(nivel_plazo(0), NivelPlazo::Nominal);
        assert_eq!(nivel_plazo(74), NivelPlazo::Nominal);
        assert_eq!(nivel_plazo(75), NivelPlazo::Advertencia);
        assert_eq!(nivel_plazo(99), NivelPlazo::Advertencia);
        assert_eq!(nivel_plazo(100), NivelPlazo::Critico);
    }
}
