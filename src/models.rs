use crate::status::{Estado, NivelPlazo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fecha (`YYYY-MM-DD`) -> descripción. Días inhábiles además de los fines de semana.
pub type Festivos = BTreeMap<String, String>;

/// Festivos oficiales publicados por la autoridad, sembrados en un archivo de datos nuevo.
const FESTIVOS_OFICIALES: &[(&str, &str)] = &[
    ("2024-01-01", "Año Nuevo"),
    ("2024-02-05", "Día de la Constitución"),
    ("2024-03-18", "Natalicio de Benito Juárez"),
    ("2024-05-01", "Día del Trabajo"),
    ("2024-09-16", "Día de la Independencia"),
    ("2024-12-25", "Navidad"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Empresa {
    pub id: u64,
    pub nombre: String,
    #[serde(default)]
    pub rfc: Option<String>,
    pub fecha_registro: String,
}

/// Caso de devolución. Todas las fechas son `YYYY-MM-DD` sin componente horario;
/// los campos derivados (días, estado, porcentaje) nunca se almacenan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Devolucion {
    pub id: u64,
    pub empresa_id: u64,
    pub monto: f64,
    pub fecha_solicitud: String,
    pub fecha_periodo: String,
    pub fecha_limite: String,
    #[serde(default)]
    pub req1_notificacion: Option<String>,
    #[serde(default)]
    pub req1_respuesta: Option<String>,
    #[serde(default)]
    pub req2_notificacion: Option<String>,
    #[serde(default)]
    pub req2_respuesta: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub empresas: BTreeMap<u64, Empresa>,
    pub devoluciones: BTreeMap<u64, Devolucion>,
    #[serde(default)]
    pub festivos: Festivos,
}

impl AppData {
    /// Estado inicial para un archivo de datos inexistente: sin registros,
    /// con el calendario de festivos oficiales ya cargado.
    pub fn seeded() -> Self {
        let mut data = Self::default();
        for (fecha, descripcion) in FESTIVOS_OFICIALES {
            data.festivos
                .insert((*fecha).to_string(), (*descripcion).to_string());
        }
        data
    }

    pub fn siguiente_id_empresa(&self) -> u64 {
        self.empresas.keys().next_back().map_or(1, |id| id + 1)
    }

    pub fn siguiente_id_devolucion(&self) -> u64 {
        self.devoluciones.keys().next_back().map_or(1, |id| id + 1)
    }
}

#[derive(Debug, Deserialize)]
pub struct NuevaEmpresa {
    pub nombre: String,
    #[serde(default)]
    pub rfc: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NuevaDevolucion {
    pub empresa: u64,
    pub monto: f64,
    pub fecha_periodo: String,
    /// Si se omite, se toma la fecha local del servidor.
    #[serde(default)]
    pub fecha_solicitud: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NuevoRequerimiento {
    pub tipo: u8,
}

#[derive(Debug, Deserialize, Default)]
pub struct ActualizacionDevolucion {
    #[serde(default)]
    pub req1_respuesta: Option<String>,
    #[serde(default)]
    pub req2_respuesta: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MensajeResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct EmpresaCreada {
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DevolucionCreada {
    pub id: u64,
    pub fecha_limite: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct RequerimientoRegistrado {
    pub message: String,
    pub fecha_notificacion: String,
    pub dias_para_responder: i64,
}

/// Renglón del listado: registro almacenado más los campos derivados del día.
#[derive(Debug, Serialize)]
pub struct DevolucionResumen {
    #[serde(flatten)]
    pub devolucion: Devolucion,
    pub dias_transcurridos: i64,
    pub dias_restantes: i64,
    pub estado: Estado,
    pub porcentaje_plazo: u8,
}

#[derive(Debug, Serialize)]
pub struct DevolucionDetalle {
    #[serde(flatten)]
    pub devolucion: Devolucion,
    pub dias_transcurridos: i64,
    pub dias_restantes: i64,
    pub estado: Estado,
    pub porcentaje_plazo: u8,
    pub nivel_plazo: NivelPlazo,
    pub en_pausa: bool,
    pub pausa_actual: Option<&'static str>,
    pub dias_para_solventar: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct EventoCalendario {
    pub id: String,
    pub fecha_solicitud: String,
    pub fecha_limite: String,
    pub estado: String,
    pub tipo: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Notificacion {
    pub titulo: String,
    pub mensaje: String,
    pub fecha: String,
    pub urgente: bool,
}
