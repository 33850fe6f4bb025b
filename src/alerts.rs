use crate::models::{AppData, Notificacion};
use crate::plazos;
use crate::state::AppState;
use crate::status::{self, Estado, compute_status};
use chrono::{Local, NaiveDate};
use std::time::Duration;
use tracing::warn;

/// Umbral de días restantes a partir del cual una devolución activa se
/// considera por vencer.
const DIAS_ALERTA: i64 = 5;

const INTERVALO_ESCANEO: Duration = Duration::from_secs(300);

/// Arma el listado de `/api/notificaciones` a partir del estado actual.
/// Se recalcula en cada lectura; nada se almacena.
pub fn build_notificaciones(data: &AppData, hoy: NaiveDate) -> Vec<Notificacion> {
    let mut notificaciones = Vec::new();

    for devolucion in data.devoluciones.values() {
        let resumen = match compute_status(devolucion, hoy) {
            Ok(resumen) => resumen,
            Err(err) => {
                warn!("devolución {} con fechas inconsistentes: {err}", devolucion.id);
                continue;
            }
        };

        match resumen.estado {
            Estado::Vencido => notificaciones.push(Notificacion {
                titulo: format!("Devolución #{} vencida", devolucion.id),
                mensaje: format!(
                    "El plazo venció el {} ({} días de retraso)",
                    devolucion.fecha_limite, -resumen.dias_restantes
                ),
                fecha: hoy.to_string(),
                urgente: true,
            }),
            Estado::Activo if resumen.dias_restantes <= DIAS_ALERTA => {
                notificaciones.push(Notificacion {
                    titulo: format!("Devolución #{} por vencer", devolucion.id),
                    mensaje: format!(
                        "Quedan {} días del plazo (límite {})",
                        resumen.dias_restantes, devolucion.fecha_limite
                    ),
                    fecha: hoy.to_string(),
                    urgente: true,
                });
            }
            Estado::PausadoReq1 | Estado::PausadoReq2 => {
                if let Some((tipo, notif)) = status::pausa_abierta(devolucion) {
                    let Ok(notificacion) = status::parse_fecha(notif) else {
                        continue;
                    };
                    let dias = plazos::dias_para_solventar(tipo, notificacion, hoy, &data.festivos);
                    notificaciones.push(Notificacion {
                        titulo: format!(
                            "Requerimiento {tipo} pendiente en devolución #{}",
                            devolucion.id
                        ),
                        mensaje: format!(
                            "Notificado el {notif}; quedan {dias} días hábiles para solventarlo"
                        ),
                        fecha: hoy.to_string(),
                        urgente: dias <= DIAS_ALERTA,
                    });
                }
            }
            Estado::Activo => {}
        }
    }

    notificaciones
}

/// Escaneo periódico de alertas. Corre todo el proceso; los casos urgentes
/// quedan en la bitácora.
pub async fn scan_loop(state: AppState) {
    let mut intervalo = tokio::time::interval(INTERVALO_ESCANEO);
    loop {
        intervalo.tick().await;
        let hoy = Local::now().date_naive();
        let data = state.data.lock().await;
        for notificacion in build_notificaciones(&data, hoy) {
            if notificacion.urgente {
                warn!("{}: {}", notificacion.titulo, notificacion.mensaje);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Devolucion;

    fn fecha(valor: &str) -> NaiveDate {
        status::parse_fecha(valor).expect("fecha de prueba")
    }

    fn con_devolucion(devolucion: Devolucion) -> AppData {
        let mut data = AppData::default();
        data.devoluciones.insert(devolucion.id, devolucion);
        data
    }

    fn base() -> Devolucion {
        Devolucion {
            id: 7,
            empresa_id: 1,
            monto: 900.0,
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
    fn vencida_genera_alerta_urgente() {
        let data = con_devolucion(base());
        let notificaciones = build_notificaciones(&data, fecha("2024-02-15"));
        assert_eq!(notificaciones.len(), 1);
        assert!(notificaciones[0].urgente);
        assert!(notificaciones[0].titulo.contains("#7 vencida"));
    }

    #[test]
    fn por_vencer_dentro_del_umbral() {
        let data = con_devolucion(base());
        let notificaciones = build_notificaciones(&data, fecha("2024-02-06"));
        assert_eq!(notificaciones.len(), 1);
        assert!(notificaciones[0].urgente);
        assert!(notificaciones[0].titulo.contains("por vencer"));

        // Lejos del límite no hay nada que avisar.
        assert!(build_notificaciones(&data, fecha("2024-01-05")).is_empty());
    }

    #[test]
    fn requerimiento_abierto_reporta_dias_para_solventar() {
        let mut devolucion = base();
        devolucion.req1_notificacion = Some("2024-01-08".to_string());
        let data = con_devolucion(devolucion);

        let notificaciones = build_notificaciones(&data, fecha("2024-01-09"));
        assert_eq!(notificaciones.len(), 1);
        assert!(notificaciones[0].titulo.contains("Requerimiento 1"));
        assert!(!notificaciones[0].urgente);
        assert!(notificaciones[0].mensaje.contains("quedan 18 días hábiles"));
    }
}
