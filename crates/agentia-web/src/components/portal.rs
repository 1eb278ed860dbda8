//! WebGL overlay that spins the portal torus during the hero transition.

use std::{
    cell::Cell,
    rc::Rc,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use agentia_core::shader::{
    CAMERA_Z, FAR_PLANE, FIELD_OF_VIEW_DEG, FRAGMENT_SHADER, Mesh, NEAR_PLANE, ROTATION_PER_FRAME,
    VERTEX_SHADER, model_view, opening_scale, perspective, portal_mesh,
};
use leptos::{html::Canvas, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGlProgram, WebGlRenderingContext as Gl, WebGlShader,
    WebGlUniformLocation,
};

fn now_ms() -> f64 {
    window().performance().map(|p| p.now()).unwrap_or_default()
}

fn compile(gl: &Gl, kind: u32, source: &str) -> Result<WebGlShader, String> {
    let shader = gl.create_shader(kind).ok_or("cannot create shader")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        Err(gl.get_shader_info_log(&shader).unwrap_or_default())
    }
}

fn link(gl: &Gl) -> Result<WebGlProgram, String> {
    let vertex = compile(gl, Gl::VERTEX_SHADER, VERTEX_SHADER)?;
    let fragment = compile(gl, Gl::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
    let program = gl.create_program().ok_or("cannot create program")?;
    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);
    if gl
        .get_program_parameter(&program, Gl::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        Err(gl.get_program_info_log(&program).unwrap_or_default())
    }
}

fn bind_attribute(
    gl: &Gl,
    program: &WebGlProgram,
    name: &str,
    data: &[f32],
    size: i32,
) -> Result<(), String> {
    let location = u32::try_from(gl.get_attrib_location(program, name))
        .map_err(|_| format!("missing attribute {name}"))?;
    let buffer = gl.create_buffer().ok_or("cannot create buffer")?;
    gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_with_array_buffer_view(
        Gl::ARRAY_BUFFER,
        &js_sys::Float32Array::from(data),
        Gl::STATIC_DRAW,
    );
    gl.vertex_attrib_pointer_with_i32(location, size, Gl::FLOAT, false, 0, 0);
    gl.enable_vertex_attrib_array(location);
    Ok(())
}

struct Renderer {
    canvas: HtmlCanvasElement,
    gl: Gl,
    projection: Option<WebGlUniformLocation>,
    model_view: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
    index_count: i32,
    opened_at: f64,
    rotation: Cell<f32>,
}

impl Renderer {
    fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let gl = canvas
            .get_context("webgl")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<Gl>().ok())
            .ok_or("WebGL is not available")?;

        let program = link(&gl)?;
        gl.use_program(Some(&program));

        let Mesh {
            positions,
            uvs,
            indices,
        } = portal_mesh();
        bind_attribute(&gl, &program, "position", &positions, 3)?;
        bind_attribute(&gl, &program, "uv", &uvs, 2)?;

        let index_buffer = gl.create_buffer().ok_or("cannot create buffer")?;
        gl.bind_buffer(Gl::ELEMENT_ARRAY_BUFFER, Some(&index_buffer));
        gl.buffer_data_with_array_buffer_view(
            Gl::ELEMENT_ARRAY_BUFFER,
            &js_sys::Uint16Array::from(indices.as_slice()),
            Gl::STATIC_DRAW,
        );

        Ok(Self {
            projection: gl.get_uniform_location(&program, "projectionMatrix"),
            model_view: gl.get_uniform_location(&program, "modelViewMatrix"),
            time: gl.get_uniform_location(&program, "time"),
            index_count: i32::try_from(indices.len()).map_err(|e| e.to_string())?,
            opened_at: now_ms(),
            rotation: Cell::new(0.0),
            canvas,
            gl,
        })
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw(&self) {
        let width = u32::try_from(self.canvas.client_width()).unwrap_or(1).max(1);
        let height = u32::try_from(self.canvas.client_height()).unwrap_or(1).max(1);
        if self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
        let gl = &self.gl;
        gl.viewport(
            0,
            0,
            i32::try_from(width).unwrap_or(i32::MAX),
            i32::try_from(height).unwrap_or(i32::MAX),
        );

        let elapsed = ((now_ms() - self.opened_at) / 1000.0) as f32;
        let rotation = self.rotation.get() + ROTATION_PER_FRAME;
        self.rotation.set(rotation);

        #[allow(clippy::cast_precision_loss)]
        let aspect = width as f32 / height as f32;
        let projection = perspective(FIELD_OF_VIEW_DEG, aspect, NEAR_PLANE, FAR_PLANE);
        let transform = model_view(rotation, opening_scale(elapsed), CAMERA_Z);

        gl.uniform_matrix4fv_with_f32_array(self.projection.as_ref(), false, &projection);
        gl.uniform_matrix4fv_with_f32_array(self.model_view.as_ref(), false, &transform);
        gl.uniform1f(self.time.as_ref(), elapsed);

        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear(Gl::COLOR_BUFFER_BIT);
        gl.draw_elements_with_i32(Gl::TRIANGLES, self.index_count, Gl::UNSIGNED_SHORT, 0);
    }
}

fn animate(renderer: Rc<Renderer>, alive: Arc<AtomicBool>) {
    if !alive.load(Ordering::Relaxed) {
        return;
    }
    renderer.draw();
    request_animation_frame(move || animate(renderer, alive));
}

#[component]
pub fn PortalOverlay() -> impl IntoView {
    let canvas = NodeRef::<Canvas>::new();
    let alive = Arc::new(AtomicBool::new(true));

    let running = alive.clone();
    let started = Cell::new(false);
    Effect::new(move |_| {
        let Some(element) = canvas.get() else {
            return;
        };
        if started.replace(true) {
            return;
        }
        match Renderer::new(element) {
            Ok(renderer) => animate(Rc::new(renderer), running.clone()),
            Err(e) => leptos::logging::warn!("portal shader disabled: {e}"),
        }
    });

    on_cleanup(move || alive.store(false, Ordering::Relaxed));

    view! {
        <div class="portal-overlay">
            <canvas node_ref=canvas class="portal-canvas"></canvas>
        </div>
    }
}
