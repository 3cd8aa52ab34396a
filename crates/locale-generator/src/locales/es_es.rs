//! Spanish (Spain).

use super::{shared, BankFormat, LocaleData};

pub(super) static DATA: LocaleData = LocaleData {
    id: "es_ES",

    first_names: &[
        "Adrián", "Alba", "Alejandro", "Álvaro", "Ana", "Andrea", "Antonio", "Carlos",
        "Carmen", "Cristina", "Daniel", "David", "Elena", "Francisco", "Javier", "Jesús",
        "José", "Juan", "Laura", "Lucía", "Manuel", "María", "Marta", "Miguel", "Pablo",
        "Paula", "Pedro", "Pilar", "Raquel", "Rosa", "Sara", "Sergio",
    ],
    last_names: &[
        "Alonso", "Álvarez", "Blanco", "Castillo", "Díaz", "Domínguez", "Fernández", "Garrido",
        "García", "Gómez", "González", "Gutiérrez", "Hernández", "Jiménez", "López", "Martín",
        "Martínez", "Molina", "Moreno", "Muñoz", "Navarro", "Ortega", "Pérez", "Ramos",
        "Rodríguez", "Romero", "Rubio", "Ruiz", "Sánchez", "Serrano", "Suárez", "Torres",
    ],
    prefixes: &["Sr.", "Sra.", "Dr.", "Dra."],
    name_formats: &[
        "{first_name} {last_name}",
        "{first_name} {last_name} {last_name}",
        "{first_name} {last_name} {last_name}",
        "{prefix} {first_name} {last_name}",
    ],
    phone_formats: &["+34 ### ### ###", "+34 ## ## ## ##", "+34### ### ###", "9## ### ###", "6## ## ## ##"],
    ssn_formats: Some(&["%#######?", "?-%######?"]),

    street_suffixes: &[
        "Acceso", "Alameda", "Avenida", "Bajada", "C.", "Calle", "Callejón", "Camino",
        "Cañada", "Glorieta", "Pasaje", "Paseo", "Plaza", "Ronda", "Rambla", "Urbanización",
        "Vial",
    ],
    street_name_formats: &[
        "{street_suffix} de {first_name} {last_name}",
        "{street_suffix} {first_name} {last_name}",
        "{street_suffix} de {last_name}",
    ],
    street_address_formats: &["{street_name} {building_number}", "{street_name} {building_number} Piso #"],
    building_number_formats: &["%", "%#", "%#", "%#", "%##"],
    cities: &[
        "Albacete", "Alicante", "Almería", "Badajoz", "Barcelona", "Bilbao", "Burgos",
        "Cáceres", "Cádiz", "Córdoba", "Gijón", "Girona", "Granada", "Huelva", "Jaén",
        "La Coruña", "Las Palmas", "León", "Logroño", "Madrid", "Málaga", "Murcia", "Oviedo",
        "Palma", "Pamplona", "Salamanca", "San Sebastián", "Santander", "Sevilla", "Toledo",
        "Valencia", "Valladolid", "Vigo", "Zaragoza",
    ],
    postcode_formats: &["#####"],
    states: None,
    countries: &[
        "Alemania", "Argentina", "Australia", "Austria", "Bélgica", "Brasil", "Canadá",
        "Chile", "China", "Colombia", "Cuba", "Dinamarca", "Ecuador", "Egipto",
        "Estados Unidos de América", "Francia", "Grecia", "India", "Irlanda", "Italia",
        "Japón", "Marruecos", "México", "Noruega", "Países Bajos", "Perú", "Polonia",
        "Portugal", "Reino Unido", "Suecia", "Suiza", "Uruguay", "Venezuela",
    ],
    address_formats: &["{street_address}\n{city}, {postcode}", "{street_address}\n{postcode} {city}"],

    free_email_domains: &["gmail.com", "hotmail.com", "hotmail.es", "yahoo.com", "yahoo.es"],
    tlds: &["com", "es", "es", "net", "org", "info"],

    company_formats: &[
        "{last_name} {company_suffix}",
        "{last_name} y {last_name} {company_suffix}",
        "{last_name}, {last_name} y {last_name}",
        "{last_name} & Asociados",
    ],
    company_suffixes: &["S.A.", "S.L.", "S.L.L.", "S.A.T.", "S.Coop.", "S.L.N.E."],
    catch_phrase_words: None,
    bs_words: None,

    jobs: &[
        "Abogado", "Actor", "Administrativo", "Albañil", "Arquitecto", "Bombero", "Camarero",
        "Carpintero", "Cocinero", "Conductor", "Contable", "Dentista", "Diseñador gráfico",
        "Electricista", "Enfermero", "Farmacéutico", "Fisioterapeuta", "Fontanero",
        "Ingeniero", "Maestro", "Mecánico", "Médico", "Panadero", "Periodista", "Piloto",
        "Policía", "Profesor", "Programador", "Psicólogo", "Veterinario",
    ],
    license_plate_formats: &["#### ???", "?-####-??"],
    bank: Some(BankFormat {
        country: "ES",
        bban_format: "####################",
    }),
    lorem_words: shared::LOREM_WORDS,
};
