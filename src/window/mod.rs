use anyhow::{anyhow, Result};
use glfw::{fail_on_errors, Action, ClientApiHint, Glfw, GlfwReceiver, Key, PWindow, WindowEvent, WindowHint};

/// Owns the GLFW library handle and the single window. Dropping this
/// terminates GLFW, so it must outlive every Vulkan object derived from the
/// window system.
pub struct WindowManager {
    glfw: Glfw,
    window: PWindow,
    receiver: GlfwReceiver<(f64, WindowEvent)>,
}

impl WindowManager {
    pub fn try_new(width: u32, height: u32, title: &str) -> Result<Self> {
        let mut glfw = glfw::init(fail_on_errors!())?;

        // rendering goes through Vulkan, not an OpenGL context
        glfw.window_hint(WindowHint::ClientApi(ClientApiHint::NoApi));
        glfw.window_hint(WindowHint::Resizable(false));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(anyhow!("Failed to create GLFW window"))?;
        window.set_key_polling(true);

        Ok(Self {
            glfw,
            window,
            receiver: events,
        })
    }

    /// The instance extensions the window system needs to present to this
    /// window. Pass-through to GLFW; no decision logic of its own.
    pub fn required_instance_extensions(&self) -> Result<Vec<String>> {
        self.glfw
            .get_required_instance_extensions()
            .ok_or(anyhow!("GLFW reports no Vulkan support on this host"))
    }

    /// Polls window events until the window is asked to close. Escape
    /// requests closure like the window close button does.
    pub fn run_event_loop(&mut self) {
        while !self.window.should_close() {
            self.glfw.poll_events();
            for (_, event) in glfw::flush_messages(&self.receiver) {
                if let WindowEvent::Key(Key::Escape, _, Action::Press, _) = event {
                    self.window.set_should_close(true);
                }
            }
        }
    }
}
