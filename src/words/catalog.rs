//! The built-in category dataset.
//!
//! Five categories of roughly thirty words each. Loaded once on first
//! access and never mutated afterwards.

use std::sync::LazyLock;

use super::{Category, CategoryId};

static CATEGORIES: LazyLock<Vec<Category>> = LazyLock::new(|| {
    vec![
        Category::new(
            1,
            "Animales",
            &[
                "León",
                "Elefante",
                "Jirafa",
                "Tigre",
                "Oso",
                "Conejo",
                "Perro",
                "Gato",
                "Caballo",
                "Vaca",
                "Cerdo",
                "Gallina",
                "Pato",
                "Pez",
                "Ballena",
                "Delfín",
                "Pingüino",
                "Águila",
                "Búho",
                "Serpiente",
                "Cocodrilo",
                "Rana",
                "Mariposa",
                "Abeja",
                "Araña",
                "Cangrejo",
                "Pulpo",
                "Estrella de mar",
                "Tiburón",
                "Cebra",
            ],
        ),
        Category::new(
            2,
            "Películas",
            &[
                "Titanic",
                "Avatar",
                "Star Wars",
                "Harry Potter",
                "Jurassic Park",
                "E.T.",
                "Jaws",
                "Rocky",
                "Terminator",
                "Matrix",
                "Batman",
                "Superman",
                "Spiderman",
                "Iron Man",
                "Frozen",
                "Toy Story",
                "Shrek",
                "Cars",
                "Finding Nemo",
                "The Lion King",
                "Aladdin",
                "Beauty and the Beast",
                "Cinderella",
                "Snow White",
                "Pinocchio",
                "Dumbo",
                "Bambi",
                "Mickey Mouse",
                "Donald Duck",
                "Goofy",
            ],
        ),
        Category::new(
            3,
            "Profesiones",
            &[
                "Doctor",
                "Enfermero",
                "Profesor",
                "Bombero",
                "Policía",
                "Chef",
                "Piloto",
                "Ingeniero",
                "Arquitecto",
                "Abogado",
                "Juez",
                "Periodista",
                "Fotógrafo",
                "Artista",
                "Músico",
                "Actor",
                "Cantante",
                "Bailarín",
                "Deportista",
                "Veterinario",
                "Dentista",
                "Psicólogo",
                "Contador",
                "Vendedor",
                "Cajero",
                "Mesero",
                "Taxista",
                "Carpintero",
                "Electricista",
                "Plomero",
            ],
        ),
        Category::new(
            4,
            "Deportes",
            &[
                "Fútbol",
                "Baloncesto",
                "Tenis",
                "Voleibol",
                "Béisbol",
                "Golf",
                "Natación",
                "Ciclismo",
                "Atletismo",
                "Boxeo",
                "Karate",
                "Judo",
                "Esquí",
                "Surf",
                "Hockey",
                "Rugby",
                "Cricket",
                "Bádminton",
                "Ping Pong",
                "Bowling",
                "Arquería",
                "Tiro con arco",
                "Escalada",
                "Paracaidismo",
                "Buceo",
                "Patinaje",
                "Gimnasia",
                "Pesca",
                "Caza",
                "Correr",
            ],
        ),
        Category::new(
            5,
            "Comida",
            &[
                "Pizza",
                "Hamburguesa",
                "Tacos",
                "Sushi",
                "Pasta",
                "Arroz",
                "Pollo",
                "Carne",
                "Pescado",
                "Ensalada",
                "Sopa",
                "Sandwich",
                "Hot dog",
                "Papas fritas",
                "Helado",
                "Pastel",
                "Galletas",
                "Chocolate",
                "Manzana",
                "Plátano",
                "Naranja",
                "Fresa",
                "Uva",
                "Pera",
                "Durazno",
                "Cereza",
                "Kiwi",
                "Piña",
                "Mango",
                "Aguacate",
            ],
        ),
    ]
});

/// All categories in display order.
#[must_use]
pub fn all() -> &'static [Category] {
    &CATEGORIES
}

/// Look up a category by id.
#[must_use]
pub fn get(id: CategoryId) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.id == id)
}
