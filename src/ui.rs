pub fn render_index(fecha: &str, total_devoluciones: usize, total_empresas: usize) -> String {
    INDEX_HTML
        .replace("{{FECHA}}", fecha)
        .replace("{{TOTAL_DEVOLUCIONES}}", &total_devoluciones.to_string())
        .replace("{{TOTAL_EMPRESAS}}", &total_empresas.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Control de Devoluciones SAT</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f4f6f8;
      --bg-2: #d7e3ee;
      --ink: #22303c;
      --accent: #1f6f54;
      --accent-2: #2f4858;
      --warning: #f39c12;
      --danger: #e74c3c;
      --ok: #2ecc71;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e8eef3 60%, #f2f5f7 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1060px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 26px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 10px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.5rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.15rem;
    }

    .subtitle {
      margin: 0;
      color: #5f6b75;
      font-size: 0.98rem;
    }

    .campana {
      position: relative;
      font-size: 1rem;
      color: var(--accent-2);
    }

    .campana .conteo {
      display: inline-block;
      min-width: 1.6em;
      text-align: center;
      background: var(--danger);
      color: white;
      border-radius: 999px;
      padding: 2px 6px;
      font-size: 0.8rem;
      font-weight: 600;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }

    .stat {
      background: white;
      border-radius: 16px;
      padding: 14px 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8b939a;
    }

    .stat .value {
      font-size: 1.45rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .formularios {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
      gap: 16px;
    }

    .tarjeta {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .tarjeta label {
      display: block;
      font-size: 0.85rem;
      color: #5f6b75;
      margin: 10px 0 4px;
    }

    .tarjeta input,
    .tarjeta select {
      width: 100%;
      padding: 9px 10px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 10px;
      font-family: inherit;
      font-size: 0.95rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 11px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      margin-top: 14px;
      background: var(--accent);
      color: white;
      transition: transform 150ms ease, opacity 150ms ease;
    }

    button:disabled {
      opacity: 0.5;
      cursor: wait;
    }

    button:active {
      transform: scale(0.98);
    }

    button.secundario {
      background: var(--accent-2);
    }

    .filtro {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .filtro select {
      padding: 8px 10px;
      border-radius: 10px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      font-family: inherit;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.92rem;
    }

    th, td {
      padding: 9px 10px;
      text-align: left;
      border-bottom: 1px solid rgba(47, 72, 88, 0.1);
    }

    th {
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #8b939a;
    }

    td.urge {
      color: var(--danger);
      font-weight: 600;
    }

    .badge {
      display: inline-block;
      padding: 3px 10px;
      border-radius: 999px;
      font-size: 0.78rem;
      font-weight: 600;
      color: white;
    }

    .badge.est-activo { background: var(--ok); }
    .badge.est-pausado { background: var(--warning); }
    .badge.est-vencido { background: var(--danger); }

    .detalle {
      display: none;
    }

    .detalle.visible {
      display: block;
    }

    .detalle dl {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 8px 16px;
      margin: 0 0 14px;
    }

    .detalle dt {
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #8b939a;
    }

    .detalle dd {
      margin: 2px 0 0;
      font-weight: 600;
    }

    .progreso {
      background: rgba(47, 72, 88, 0.12);
      border-radius: 999px;
      height: 14px;
      overflow: hidden;
      margin: 6px 0 4px;
    }

    .progreso .barra {
      height: 100%;
      width: 0;
      background: var(--ok);
      transition: width 300ms ease;
    }

    .acciones-detalle {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    .acciones-detalle button {
      margin-top: 6px;
    }

    .notificaciones ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .notificaciones li {
      background: white;
      border-radius: 12px;
      padding: 10px 14px;
      border-left: 4px solid var(--accent-2);
    }

    .notificaciones li.urgente {
      border-left-color: var(--danger);
    }

    .notificaciones li p {
      margin: 4px 0 0;
      font-size: 0.9rem;
      color: #5f6b75;
    }

    .eventos ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .eventos li {
      background: white;
      border-radius: 12px;
      padding: 10px 14px;
      border-left: 4px solid var(--accent);
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      gap: 6px 12px;
      font-size: 0.92rem;
    }

    .eventos li.req {
      border-left-color: var(--warning);
    }

    .eventos li.vencido {
      border-left-color: var(--danger);
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @media (max-width: 640px) {
      .app {
        padding: 26px 20px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Control de Devoluciones SAT</h1>
        <p class="subtitle">Plazos de devolución, requerimientos y solvencias al {{FECHA}}.</p>
      </div>
      <div class="campana">Alertas <span id="notif-conteo" class="conteo">0</span></div>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Fecha</span>
        <span id="fecha" class="value">{{FECHA}}</span>
      </div>
      <div class="stat">
        <span class="label">Devoluciones</span>
        <span id="total-devoluciones" class="value">{{TOTAL_DEVOLUCIONES}}</span>
      </div>
      <div class="stat">
        <span class="label">Empresas</span>
        <span id="total-empresas" class="value">{{TOTAL_EMPRESAS}}</span>
      </div>
      <div class="stat">
        <span class="label">Urgentes</span>
        <span id="total-urgentes" class="value">0</span>
      </div>
    </section>

    <section class="formularios">
      <div class="tarjeta">
        <h2>Registrar empresa</h2>
        <label for="nombre-empresa">Nombre</label>
        <input id="nombre-empresa" type="text" placeholder="Comercializadora X" />
        <label for="rfc-empresa">RFC (opcional)</label>
        <input id="rfc-empresa" type="text" placeholder="XAXX010101000" />
        <button id="btn-empresa" class="secundario" type="button">Registrar empresa</button>
      </div>
      <div class="tarjeta">
        <h2>Registrar devolución</h2>
        <label for="empresa">Empresa</label>
        <select id="empresa"></select>
        <label for="monto">Monto solicitado</label>
        <input id="monto" type="number" min="0" step="0.01" placeholder="125000.00" />
        <label for="fecha-periodo">Período fiscal</label>
        <input id="fecha-periodo" type="text" placeholder="2024-01" />
        <label for="fecha-solicitud">Fecha de solicitud</label>
        <input id="fecha-solicitud" type="date" />
        <button id="btn-devolucion" type="button">Registrar devolución</button>
      </div>
    </section>

    <section class="tarjeta">
      <div class="filtro">
        <h2>Devoluciones</h2>
        <select id="filtro-empresa">
          <option value="">Todas las empresas</option>
        </select>
      </div>
      <table>
        <thead>
          <tr>
            <th>ID</th>
            <th>Empresa</th>
            <th>Solicitud</th>
            <th>Límite</th>
            <th>1er Req</th>
            <th>2do Req</th>
            <th>Días restantes</th>
            <th>Estado</th>
            <th></th>
          </tr>
        </thead>
        <tbody id="tabla-devoluciones"></tbody>
      </table>
    </section>

    <section id="detalle" class="tarjeta detalle">
      <h2>Devolución <span id="detalle-id"></span></h2>
      <dl>
        <div><dt>Solicitud</dt><dd id="detalle-solicitud"></dd></div>
        <div><dt>Límite</dt><dd id="detalle-limite"></dd></div>
        <div><dt>Días transcurridos</dt><dd id="detalle-transcurridos"></dd></div>
        <div><dt>Días restantes</dt><dd id="detalle-restantes"></dd></div>
        <div><dt>Estado</dt><dd><span id="detalle-estado" class="badge"></span></dd></div>
        <div><dt>1er req. notificado</dt><dd id="detalle-req1-notif"></dd></div>
        <div><dt>1er req. solventado</dt><dd id="detalle-req1-resp"></dd></div>
        <div><dt>2do req. notificado</dt><dd id="detalle-req2-notif"></dd></div>
        <div><dt>2do req. solventado</dt><dd id="detalle-req2-resp"></dd></div>
        <div><dt>Días para solventar</dt><dd id="detalle-solventar"></dd></div>
      </dl>
      <div class="progreso"><div id="barra-progreso" class="barra"></div></div>
      <p id="porcentaje-progreso" class="subtitle"></p>
      <div class="acciones-detalle">
        <button id="btn-req1" class="secundario" type="button">Registrar 1er requerimiento</button>
        <button id="btn-solv1" type="button">Solventar 1ro hoy</button>
        <button id="btn-req2" class="secundario" type="button">Registrar 2do requerimiento</button>
        <button id="btn-solv2" type="button">Solventar 2do hoy</button>
      </div>
    </section>

    <section class="tarjeta eventos">
      <h2>Calendario de eventos</h2>
      <ul id="calendario-lista"></ul>
    </section>

    <section class="tarjeta notificaciones">
      <h2>Notificaciones</h2>
      <ul id="notificaciones-lista"></ul>
    </section>

    <div class="status" id="status"></div>
    <p class="subtitle">Las fechas usan el día calendario del servidor. El plazo se pausa mientras un requerimiento siga sin solventar.</p>
  </main>

  <script>
    const ui = {
      status: document.getElementById('status'),
      selectEmpresa: document.getElementById('empresa'),
      filtroEmpresa: document.getElementById('filtro-empresa'),
      tabla: document.getElementById('tabla-devoluciones'),
      detalle: document.getElementById('detalle'),
      calendario: document.getElementById('calendario-lista'),
      notifConteo: document.getElementById('notif-conteo'),
      notifLista: document.getElementById('notificaciones-lista'),
      totalDevoluciones: document.getElementById('total-devoluciones'),
      totalEmpresas: document.getElementById('total-empresas'),
      totalUrgentes: document.getElementById('total-urgentes')
    };

    const ESTADOS = {
      activo: { texto: 'ACTIVO', clase: 'est-activo' },
      pausado_req1: { texto: 'PAUSADO REQ 1', clase: 'est-pausado' },
      pausado_req2: { texto: 'PAUSADO REQ 2', clase: 'est-pausado' },
      vencido: { texto: 'VENCIDO', clase: 'est-vencido' }
    };

    const NIVEL_COLORES = {
      nominal: '#2ecc71',
      advertencia: '#f39c12',
      critico: '#e74c3c'
    };

    let estado = {
      empresas: [],
      devoluciones: [],
      seleccion: null
    };

    const setStatus = (mensaje, tipo) => {
      ui.status.textContent = mensaje;
      ui.status.dataset.type = tipo || '';
    };

    const fetchJson = async (url, opciones) => {
      const res = await fetch(url, opciones);
      if (!res.ok) {
        const cuerpo = await res.json().catch(() => ({}));
        throw new Error(cuerpo.message || ('Error HTTP ' + res.status));
      }
      return res.json();
    };

    const post = (url, datos) => fetchJson(url, {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(datos)
    });

    const put = (url, datos) => fetchJson(url, {
      method: 'PUT',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(datos)
    });

    // Evita dobles envíos: el control queda deshabilitado mientras su
    // petición siga en vuelo.
    const conBloqueo = async (boton, accion) => {
      boton.disabled = true;
      try {
        await accion();
      } finally {
        boton.disabled = false;
      }
    };

    const nombreEmpresa = (id) => {
      const empresa = estado.empresas.find((e) => e.id === id);
      return empresa ? empresa.nombre : ('#' + id);
    };

    const fechaOGuion = (valor) => valor || '-';

    const renderEmpresas = () => {
      const opciones = estado.empresas
        .map((e) => '<option value="' + e.id + '">' + e.nombre + '</option>')
        .join('');
      ui.selectEmpresa.innerHTML = '<option value="">Selecciona una empresa</option>' + opciones;
      const filtroActual = ui.filtroEmpresa.value;
      ui.filtroEmpresa.innerHTML = '<option value="">Todas las empresas</option>' + opciones;
      ui.filtroEmpresa.value = filtroActual;
      ui.totalEmpresas.textContent = estado.empresas.length;
    };

    const renderTabla = () => {
      const filtro = ui.filtroEmpresa.value;
      const visibles = filtro
        ? estado.devoluciones.filter((d) => String(d.empresa_id) === filtro)
        : estado.devoluciones;

      ui.tabla.innerHTML = visibles.map((d) => {
        const info = ESTADOS[d.estado] || ESTADOS.activo;
        const urge = d.dias_restantes < 10 ? ' class="urge"' : '';
        return '<tr>' +
          '<td>' + d.id + '</td>' +
          '<td>' + nombreEmpresa(d.empresa_id) + '</td>' +
          '<td>' + d.fecha_solicitud + '</td>' +
          '<td>' + d.fecha_limite + '</td>' +
          '<td>' + fechaOGuion(d.req1_notificacion) + '</td>' +
          '<td>' + fechaOGuion(d.req2_notificacion) + '</td>' +
          '<td' + urge + '>' + d.dias_restantes + '</td>' +
          '<td><span class="badge ' + info.clase + '">' + info.texto + '</span></td>' +
          '<td><button type="button" data-id="' + d.id + '">Gestionar</button></td>' +
          '</tr>';
      }).join('');
      ui.totalDevoluciones.textContent = estado.devoluciones.length;
    };

    const renderDetalle = (d) => {
      estado.seleccion = d.id;
      ui.detalle.classList.add('visible');
      document.getElementById('detalle-id').textContent = '#' + d.id + ' · ' + nombreEmpresa(d.empresa_id);
      document.getElementById('detalle-solicitud').textContent = d.fecha_solicitud;
      document.getElementById('detalle-limite').textContent = d.fecha_limite;
      document.getElementById('detalle-transcurridos').textContent = d.dias_transcurridos;
      document.getElementById('detalle-restantes').textContent = d.dias_restantes;
      document.getElementById('detalle-req1-notif').textContent = fechaOGuion(d.req1_notificacion);
      document.getElementById('detalle-req1-resp').textContent = fechaOGuion(d.req1_respuesta);
      document.getElementById('detalle-req2-notif').textContent = fechaOGuion(d.req2_notificacion);
      document.getElementById('detalle-req2-resp').textContent = fechaOGuion(d.req2_respuesta);
      document.getElementById('detalle-solventar').textContent =
        d.dias_para_solventar === null ? '-' : d.dias_para_solventar;

      const info = ESTADOS[d.estado] || ESTADOS.activo;
      const badge = document.getElementById('detalle-estado');
      badge.textContent = info.texto;
      badge.className = 'badge ' + info.clase;

      const barra = document.getElementById('barra-progreso');
      barra.style.width = d.porcentaje_plazo + '%';
      barra.style.background = NIVEL_COLORES[d.nivel_plazo] || NIVEL_COLORES.nominal;
      document.getElementById('porcentaje-progreso').textContent =
        d.porcentaje_plazo + '% del plazo utilizado';

      document.getElementById('btn-req1').disabled = Boolean(d.req1_notificacion);
      document.getElementById('btn-solv1').disabled = !d.req1_notificacion || Boolean(d.req1_respuesta);
      document.getElementById('btn-req2').disabled = !d.req1_notificacion || Boolean(d.req2_notificacion);
      document.getElementById('btn-solv2').disabled = !d.req2_notificacion || Boolean(d.req2_respuesta);
    };

    const renderCalendario = (eventos) => {
      const orden = eventos.slice().sort((a, b) => a.fecha_solicitud.localeCompare(b.fecha_solicitud));
      ui.calendario.innerHTML = orden.length
        ? orden.map((e) => {
            if (e.tipo === 'requerimiento') {
              const fin = e.fecha_limite ? 'solventado el ' + e.fecha_limite : 'sin solventar';
              return '<li class="req"><span>Requerimiento ' + e.id + '</span>' +
                '<span>notificado el ' + e.fecha_solicitud + ', ' + fin + '</span></li>';
            }
            const clase = e.estado === 'vencido' ? ' class="vencido"' : '';
            return '<li' + clase + '><span>Devolución #' + e.id + ' (' + e.estado + ')</span>' +
              '<span>del ' + e.fecha_solicitud + ' al ' + e.fecha_limite + '</span></li>';
          }).join('')
        : '<li>Sin eventos registrados.</li>';
    };

    const renderNotificaciones = (lista) => {
      const urgentes = lista.filter((n) => n.urgente).length;
      ui.notifConteo.textContent = lista.length;
      ui.totalUrgentes.textContent = urgentes;
      ui.notifLista.innerHTML = lista.length
        ? lista.map((n) =>
            '<li class="' + (n.urgente ? 'urgente' : '') + '">' +
            '<strong>' + n.titulo + '</strong>' +
            '<p>' + n.mensaje + ' (' + n.fecha + ')</p>' +
            '</li>'
          ).join('')
        : '<li>Sin pendientes por ahora.</li>';
    };

    const cargarEmpresas = async () => {
      estado.empresas = await fetchJson('/api/empresas');
      renderEmpresas();
    };

    const cargarDevoluciones = async () => {
      estado.devoluciones = await fetchJson('/api/devoluciones');
      renderTabla();
    };

    const cargarCalendario = async () => {
      renderCalendario(await fetchJson('/api/devoluciones/calendario'));
    };

    const cargarNotificaciones = async () => {
      renderNotificaciones(await fetchJson('/api/notificaciones'));
    };

    const abrirDetalle = async (id) => {
      renderDetalle(await fetchJson('/api/devoluciones/' + id));
    };

    const refrescar = async () => {
      await Promise.all([cargarEmpresas(), cargarDevoluciones(), cargarCalendario(), cargarNotificaciones()]);
      if (estado.seleccion !== null) {
        await abrirDetalle(estado.seleccion);
      }
    };

    // Sondeo de notificaciones cada 5 minutos, detenido mientras la pestaña
    // esté oculta y reanudado (con una carga inmediata) al volver.
    const INTERVALO_NOTIFICACIONES = 300000;
    let notifTimer = null;

    const iniciarSondeo = () => {
      if (notifTimer === null) {
        notifTimer = setInterval(() => {
          cargarNotificaciones().catch((err) => setStatus(err.message, 'error'));
        }, INTERVALO_NOTIFICACIONES);
      }
    };

    const detenerSondeo = () => {
      if (notifTimer !== null) {
        clearInterval(notifTimer);
        notifTimer = null;
      }
    };

    document.addEventListener('visibilitychange', () => {
      if (document.hidden) {
        detenerSondeo();
      } else {
        cargarNotificaciones().catch((err) => setStatus(err.message, 'error'));
        iniciarSondeo();
      }
    });

    document.getElementById('btn-empresa').addEventListener('click', (evento) => {
      conBloqueo(evento.currentTarget, async () => {
        const nombre = document.getElementById('nombre-empresa').value.trim();
        const rfc = document.getElementById('rfc-empresa').value.trim();
        if (!nombre) {
          setStatus('El nombre de la empresa es obligatorio', 'error');
          return;
        }
        try {
          await post('/api/empresas', { nombre: nombre, rfc: rfc || null });
          document.getElementById('nombre-empresa').value = '';
          document.getElementById('rfc-empresa').value = '';
          await cargarEmpresas();
          setStatus('Empresa registrada', 'ok');
        } catch (err) {
          setStatus(err.message, 'error');
        }
      });
    });

    document.getElementById('btn-devolucion').addEventListener('click', (evento) => {
      conBloqueo(evento.currentTarget, async () => {
        const empresa = ui.selectEmpresa.value;
        const monto = parseFloat(document.getElementById('monto').value);
        const periodo = document.getElementById('fecha-periodo').value.trim();
        const solicitud = document.getElementById('fecha-solicitud').value;
        if (!empresa || !periodo || !(monto > 0)) {
          setStatus('Empresa, monto positivo y período son obligatorios', 'error');
          return;
        }
        try {
          const creada = await post('/api/devoluciones', {
            empresa: Number(empresa),
            monto: monto,
            fecha_periodo: periodo,
            fecha_solicitud: solicitud || null
          });
          setStatus('Devolución registrada. Límite: ' + creada.fecha_limite, 'ok');
          await refrescar();
          await abrirDetalle(creada.id);
        } catch (err) {
          setStatus(err.message, 'error');
        }
      });
    });

    ui.tabla.addEventListener('click', (evento) => {
      const boton = evento.target.closest('button[data-id]');
      if (boton) {
        abrirDetalle(Number(boton.dataset.id)).catch((err) => setStatus(err.message, 'error'));
      }
    });

    ui.filtroEmpresa.addEventListener('change', renderTabla);

    const accionDetalle = (idBoton, accion) => {
      document.getElementById(idBoton).addEventListener('click', (evento) => {
        if (estado.seleccion === null) {
          return;
        }
        conBloqueo(evento.currentTarget, async () => {
          try {
            await accion(estado.seleccion);
            await refrescar();
            setStatus('Registrado', 'ok');
          } catch (err) {
            setStatus(err.message, 'error');
          }
        });
      });
    };

    const hoyLocal = () => {
      const hoy = new Date();
      hoy.setMinutes(hoy.getMinutes() - hoy.getTimezoneOffset());
      return hoy.toISOString().split('T')[0];
    };

    accionDetalle('btn-req1', (id) => post('/api/devoluciones/' + id + '/requerimientos', { tipo: 1 }));
    accionDetalle('btn-req2', (id) => post('/api/devoluciones/' + id + '/requerimientos', { tipo: 2 }));
    accionDetalle('btn-solv1', (id) => put('/api/devoluciones/' + id, { req1_respuesta: hoyLocal() }));
    accionDetalle('btn-solv2', (id) => put('/api/devoluciones/' + id, { req2_respuesta: hoyLocal() }));

    refrescar().catch((err) => setStatus(err.message, 'error'));
    iniciarSondeo();
  </script>
</body>
</html>
"#;
