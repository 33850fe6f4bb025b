use crate::alerts::build_notificaciones;
use crate::errors::AppError;
use crate::models::{
    ActualizacionDevolucion, AppData, Devolucion, DevolucionCreada, DevolucionDetalle,
    DevolucionResumen, Empresa, EmpresaCreada, EventoCalendario, MensajeResponse, Notificacion,
    NuevaDevolucion, NuevaEmpresa, NuevoRequerimiento, RequerimientoRegistrado,
};
use crate::plazos;
use crate::state::AppState;
use crate::status::{self, compute_status};
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let hoy = hoy_local();
    let data = state.data.lock().await;
    Html(render_index(
        &hoy.to_string(),
        data.devoluciones.len(),
        data.empresas.len(),
    ))
}

pub async fn listar_devoluciones(
    State(state): State<AppState>,
) -> Result<Json<Vec<DevolucionResumen>>, AppError> {
    let hoy = hoy_local();
    let data = state.data.lock().await;

    let mut lista = Vec::with_capacity(data.devoluciones.len());
    for devolucion in data.devoluciones.values() {
        let resumen = compute_status(devolucion, hoy)?;
        lista.push(DevolucionResumen {
            devolucion: devolucion.clone(),
            dias_transcurridos: resumen.dias_transcurridos,
            dias_restantes: resumen.dias_restantes,
            estado: resumen.estado,
            porcentaje_plazo: resumen.porcentaje_plazo,
        });
    }
    lista.sort_by(|a, b| b.devolucion.fecha_solicitud.cmp(&a.devolucion.fecha_solicitud));

    Ok(Json(lista))
}

pub async fn crear_devolucion(
    State(state): State<AppState>,
    Json(payload): Json<NuevaDevolucion>,
) -> Result<(StatusCode, Json<DevolucionCreada>), AppError> {
    if payload.monto <= 0.0 || !payload.monto.is_finite() {
        return Err(AppError::bad_request("el monto debe ser positivo"));
    }
    let fecha_periodo = payload.fecha_periodo.trim();
    if fecha_periodo.is_empty() {
        return Err(AppError::bad_request("fecha_periodo es obligatoria"));
    }

    let mut data = state.data.lock().await;
    if !data.empresas.contains_key(&payload.empresa) {
        return Err(AppError::bad_request("empresa no registrada"));
    }

    let fecha_solicitud = payload
        .fecha_solicitud
        .unwrap_or_else(|| hoy_local().to_string());
    let solicitud = status::parse_fecha(&fecha_solicitud)?;
    let fecha_limite = plazos::fecha_limite(solicitud, &data.festivos).to_string();

    let id = data.siguiente_id_devolucion();
    let devolucion = Devolucion {
        id,
        empresa_id: payload.empresa,
        monto: payload.monto,
        fecha_solicitud,
        fecha_periodo: fecha_periodo.to_string(),
        fecha_limite: fecha_limite.clone(),
        req1_notificacion: None,
        req1_respuesta: None,
        req2_notificacion: None,
        req2_respuesta: None,
    };
    data.devoluciones.insert(id, devolucion);
    persist_data(&state.data_path, &data).await?;

    info!("devolución {id} registrada con límite {fecha_limite}");
    Ok((
        StatusCode::CREATED,
        Json(DevolucionCreada {
            id,
            fecha_limite,
            message: "Devolución registrada".to_string(),
        }),
    ))
}

pub async fn obtener_devolucion(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DevolucionDetalle>, AppError> {
    let hoy = hoy_local();
    let data = state.data.lock().await;
    let devolucion = data
        .devoluciones
        .get(&id)
        .ok_or_else(|| AppError::not_found("Devolución no encontrada"))?;

    Ok(Json(detalle(devolucion, &data, hoy)?))
}

fn detalle(
    devolucion: &Devolucion,
    data: &AppData,
    hoy: NaiveDate,
) -> Result<DevolucionDetalle, AppError> {
    let resumen = compute_status(devolucion, hoy)?;

    let mut pausa_actual = None;
    let mut dias_para_solventar = None;
    if let Some((tipo, notif)) = status::pausa_abierta(devolucion) {
        pausa_actual = Some(if tipo == 1 { "req1" } else { "req2" });
        let notificacion = status::parse_fecha(notif)?;
        dias_para_solventar = Some(plazos::dias_para_solventar(
            tipo,
            notificacion,
            hoy,
            &data.festivos,
        ));
    }

    Ok(DevolucionDetalle {
        devolucion: devolucion.clone(),
        dias_transcurridos: resumen.dias_transcurridos,
        dias_restantes: resumen.dias_restantes,
        estado: resumen.estado,
        porcentaje_plazo: resumen.porcentaje_plazo,
        nivel_plazo: status::nivel_plazo(resumen.porcentaje_plazo),
        en_pausa: pausa_actual.is_some(),
        pausa_actual,
        dias_para_solventar,
    })
}

pub async fn actualizar_devolucion(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<ActualizacionDevolucion>,
) -> Result<Json<MensajeResponse>, AppError> {
    if payload.req1_respuesta.is_none() && payload.req2_respuesta.is_none() {
        return Err(AppError::bad_request(
            "se espera req1_respuesta o req2_respuesta",
        ));
    }

    let mut data = state.data.lock().await;
    let devolucion = data
        .devoluciones
        .get(&id)
        .ok_or_else(|| AppError::not_found("Devolución no encontrada"))?;

    let mut actualizada = devolucion.clone();
    if let Some(fecha) = payload.req1_respuesta {
        if actualizada.req1_respuesta.is_some() {
            return Err(AppError::bad_request("req1_respuesta ya registrada"));
        }
        actualizada.req1_respuesta = Some(fecha);
    }
    if let Some(fecha) = payload.req2_respuesta {
        if actualizada.req2_respuesta.is_some() {
            return Err(AppError::bad_request("req2_respuesta ya registrada"));
        }
        actualizada.req2_respuesta = Some(fecha);
    }
    status::validar_secuencia(&actualizada)?;

    data.devoluciones.insert(id, actualizada);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(MensajeResponse {
        message: "Actualizado correctamente".to_string(),
    }))
}

pub async fn agregar_requerimiento(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<NuevoRequerimiento>,
) -> Result<Json<RequerimientoRegistrado>, AppError> {
    if payload.tipo != 1 && payload.tipo != 2 {
        return Err(AppError::bad_request("Tipo inválido. Use 1 o 2"));
    }

    let hoy = hoy_local();
    let mut data = state.data.lock().await;
    let devolucion = data
        .devoluciones
        .get(&id)
        .ok_or_else(|| AppError::not_found("Devolución no encontrada"))?;

    let mut actualizada = devolucion.clone();
    if payload.tipo == 1 {
        if actualizada.req1_notificacion.is_some() {
            return Err(AppError::bad_request("el primer requerimiento ya fue registrado"));
        }
        actualizada.req1_notificacion = Some(hoy.to_string());
    } else {
        if actualizada.req1_notificacion.is_none() {
            return Err(AppError::bad_request(
                "el segundo requerimiento requiere un primero registrado",
            ));
        }
        if actualizada.req2_notificacion.is_some() {
            return Err(AppError::bad_request("el segundo requerimiento ya fue registrado"));
        }
        actualizada.req2_notificacion = Some(hoy.to_string());
    }
    status::validar_secuencia(&actualizada)?;

    data.devoluciones.insert(id, actualizada);
    persist_data(&state.data_path, &data).await?;

    info!("requerimiento tipo {} registrado en devolución {id}", payload.tipo);
    Ok(Json(RequerimientoRegistrado {
        message: "Requerimiento registrado".to_string(),
        fecha_notificacion: hoy.to_string(),
        dias_para_responder: plazos::plazo_requerimiento(payload.tipo),
    }))
}

pub async fn calendario(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventoCalendario>>, AppError> {
    let hoy = hoy_local();
    let data = state.data.lock().await;

    let mut eventos = Vec::new();
    for devolucion in data.devoluciones.values() {
        let resumen = compute_status(devolucion, hoy)?;
        eventos.push(EventoCalendario {
            id: devolucion.id.to_string(),
            fecha_solicitud: devolucion.fecha_solicitud.clone(),
            fecha_limite: devolucion.fecha_limite.clone(),
            estado: resumen.estado.as_str().to_string(),
            tipo: "devolucion",
        });
        if let Some(notif) = &devolucion.req1_notificacion {
            eventos.push(EventoCalendario {
                id: format!("{}-req1", devolucion.id),
                fecha_solicitud: notif.clone(),
                fecha_limite: devolucion.req1_respuesta.clone().unwrap_or_default(),
                estado: "requerimiento".to_string(),
                tipo: "requerimiento",
            });
        }
        if let Some(notif) = &devolucion.req2_notificacion {
            eventos.push(EventoCalendario {
                id: format!("{}-req2", devolucion.id),
                fecha_solicitud: notif.clone(),
                fecha_limite: devolucion.req2_respuesta.clone().unwrap_or_default(),
                estado: "requerimiento".to_string(),
                tipo: "requerimiento",
            });
        }
    }

    Ok(Json(eventos))
}

pub async fn listar_empresas(
    State(state): State<AppState>,
) -> Result<Json<Vec<Empresa>>, AppError> {
    let data = state.data.lock().await;
    let mut empresas: Vec<Empresa> = data.empresas.values().cloned().collect();
    empresas.sort_by(|a, b| a.nombre.cmp(&b.nombre));
    Ok(Json(empresas))
}

pub async fn crear_empresa(
    State(state): State<AppState>,
    Json(payload): Json<NuevaEmpresa>,
) -> Result<(StatusCode, Json<EmpresaCreada>), AppError> {
    let nombre = payload.nombre.trim();
    if nombre.is_empty() {
        return Err(AppError::bad_request("el nombre de la empresa es obligatorio"));
    }
    let rfc = payload
        .rfc
        .as_deref()
        .map(str::trim)
        .filter(|rfc| !rfc.is_empty())
        .map(str::to_uppercase);

    let mut data = state.data.lock().await;
    let id = data.siguiente_id_empresa();
    data.empresas.insert(
        id,
        Empresa {
            id,
            nombre: nombre.to_string(),
            rfc,
            fecha_registro: hoy_local().to_string(),
        },
    );
    persist_data(&state.data_path, &data).await?;

    Ok((
        StatusCode::CREATED,
        Json(EmpresaCreada {
            id,
            message: "Empresa registrada".to_string(),
        }),
    ))
}

pub async fn notificaciones(
    State(state): State<AppState>,
) -> Result<Json<Vec<Notificacion>>, AppError> {
    let hoy = hoy_local();
    let data = state.data.lock().await;
    Ok(Json(build_notificaciones(&data, hoy)))
}

fn hoy_local() -> NaiveDate {
    Local::now().date_naive()
}
