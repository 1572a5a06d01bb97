//! Pages that only have a heading and a short description so far.

fn placeholder(heading: &str, description: &str) -> String {
    format!(
        r#"<h2 class="text-2xl font-bold text-text-main mb-4">{}</h2><p class="text-text-muted">{}</p>"#,
        heading, description
    )
}

pub fn users() -> String {
    placeholder("Gerenciamento de Usuários", "Conteúdo de usuários aqui...")
}

pub fn patients() -> String {
    placeholder("Pacientes", "Lista de pacientes aqui...")
}

pub fn appointments() -> String {
    placeholder("Agendamentos", "Calendário e lista de agendamentos aqui...")
}

pub fn prescriptions() -> String {
    placeholder("Receitas", "Gestão de receitas médicas aqui...")
}

pub fn certificates() -> String {
    placeholder("Atestados", "Emissão de atestados aqui...")
}
